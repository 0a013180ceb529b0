//! # Landing slice
//!
//! The marketing page for Vesla ERP as a Dioxus component tree.
//!
//! * [`Landing`] is the root component. It expects a
//!   [`SiteConfig`](vesla_domain::config::SiteConfig) in context, provided by the desktop
//!   launcher or by [`render_document`].
//! * [`use_counter`] drives the stat band's count-up animation on the UI runtime's frame tick.
//! * With the `ssr` feature, [`render_page`] and [`render_document`] pre-render the page to HTML;
//!   counters then show their final values since no repaint loop exists.

mod components;
mod hooks;
#[cfg(feature = "ssr")]
mod render;

pub use components::*;
pub use hooks::{FRAME_INTERVAL, Prerendered, use_counter};
#[cfg(feature = "ssr")]
pub use render::{render_document, render_page};

/// Markup injected into the document head: viewport and the utility stylesheet.
pub const HEAD: &str = concat!(
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
    r#"<script src="https://cdn.tailwindcss.com"></script>"#,
);
