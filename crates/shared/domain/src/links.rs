//! Outbound links into the hosted ERP application.

use crate::config::SiteConfig;

/// Builds URLs relative to the ERP base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErpLinks {
    base: String,
}

impl ErpLinks {
    /// Creates the link builder; a trailing `/` on `base` is dropped.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.erp.base_url.as_str())
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/login", self.base)
    }

    /// Knowledge-base article for a module, keyed by module id.
    #[must_use]
    pub fn knowledge_base(&self, module_id: &str) -> String {
        format!("{}/knowledge-base?module={module_id}", self.base)
    }
}

/// `mailto:` URL for an email address.
#[must_use]
pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}
