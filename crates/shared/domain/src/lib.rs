//! # Domain Models
//!
//! This crate contains the pure data behind the landing page with minimal dependencies
//! (`serde`, `bitflags`). Keep it lean: no I/O, rendering, or timers. Static tables,
//! lookup helpers, and the arithmetic behind the animated counter live here so they can
//! be tested without a UI runtime.

pub mod audience;
pub mod catalog;
pub mod config;
pub mod counter;
pub mod format;
pub mod icon;
pub mod links;
pub mod menu;
pub mod theme;

/// Product name shown in the navigation bar, hero, and footer.
pub const PRODUCT_NAME: &str = "Vesla ERP";

/// Legal owner printed in the footer.
pub const COPYRIGHT_HOLDER: &str = "MRM Investments";
