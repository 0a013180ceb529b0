use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Default base URL of the hosted ERP application.
pub const DEFAULT_ERP_URL: &str = "https://demo.vesla.ae";

/// Default duration of the stat counter animation, in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Default number of daily log files kept on disk.
pub const DEFAULT_LOG_RETENTION: usize = 7;

/// Top-level site configuration shared by the desktop shell and the server.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub erp: ErpConfig,
    pub contact: ContactConfig,
    pub counter: CounterConfig,
    pub server: ServerConfig,
    pub window: WindowConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components and handlers.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Location of the external ERP application the page links to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErpConfig {
    pub base_url: String,
}

/// Contact details printed in the call-to-action section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Animated counter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
}

/// HTTP listener for the server app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Desktop window geometry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Verbosity floor for the apps' log output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Logging settings applied by both apps at start-up.
///
/// Console output is always on; `directory` adds daily rolling files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Extra directives, e.g. `tower_http=debug`. `RUST_LOG` is used when unset.
    pub filter: Option<String>,
    pub directory: Option<PathBuf>,
    /// Write files as JSON lines instead of plain text.
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            filter: None,
            directory: None,
            json: false,
            max_files: DEFAULT_LOG_RETENTION,
        }
    }
}

impl Default for ErpConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_ERP_URL.to_owned() }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@vesla.ae".to_owned(),
            phone: "+971 4 XXX XXXX".to_owned(),
            location: "Dubai, UAE".to_owned(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_COUNTER_DURATION_MS }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4590 }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: crate::PRODUCT_NAME.to_owned(), width: 1280.0, height: 860.0 }
    }
}

impl CounterConfig {
    /// The configured animation length as a [`std::time::Duration`].
    #[must_use]
    pub const fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.duration_ms)
    }
}
