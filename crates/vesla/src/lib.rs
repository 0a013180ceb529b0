//! Facade crate for the Vesla landing page.
//! Re-exports domain/kernel primitives and the landing slice.
//! Keep this crate thin: it should compose other crates, not implement page logic.
//!
//! ## Usage
//! - Add `vesla` with the desired feature flags (`server`/`client`).
//! - `client` exposes the Dioxus components; `server` adds static pre-rendering.

pub use vesla_domain as domain;
pub use vesla_kernel as kernel;
#[cfg(any(feature = "client", feature = "server"))]
pub use vesla_landing as landing;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn unknown_features_are_disabled() {
        assert!(!features::is_enabled("billing"));
        for name in features::ENABLED {
            assert!(features::is_enabled(name));
        }
    }
}
