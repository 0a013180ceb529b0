//! Kernel utilities shared across the apps.
//! Keep this crate lightweight; it re-exports the domain and owns configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! use vesla_kernel::config::load_config;
//! use vesla_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("site")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use vesla_domain as domain;
