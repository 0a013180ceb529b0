use crate::components::Landing;
use crate::hooks::Prerendered;
use crate::HEAD;
use dioxus::prelude::*;
use vesla_domain::config::SiteConfig;

#[derive(Props, Clone, PartialEq)]
struct StaticRootProps {
    site: SiteConfig,
}

#[allow(non_snake_case)]
fn StaticRoot(props: StaticRootProps) -> Element {
    use_context_provider(|| props.site.clone());
    use_context_provider(|| Prerendered);
    rsx! { Landing {} }
}

/// Renders the page body once, with counters at their final values.
#[must_use]
pub fn render_page(site: &SiteConfig) -> String {
    let mut dom = VirtualDom::new_with_props(StaticRoot, StaticRootProps { site: site.clone() });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders a complete HTML document around [`render_page`].
#[must_use]
pub fn render_document(site: &SiteConfig) -> String {
    let body = render_page(site);
    tracing::debug!(bytes = body.len(), "Pre-rendered landing page");

    let title = escape_text(&site.window.title);
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{title}</title>{HEAD}</head><body><div id=\"main\">{body}</div></body></html>"
    )
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
