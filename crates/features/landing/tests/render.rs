use dioxus::prelude::*;
use vesla_domain::catalog::{
    MODULES, PRICING_PLANS, TESTIMONIAL_STARS, TESTIMONIALS, public_modules,
};
use vesla_domain::config::SiteConfig;
use vesla_landing::{Landing, render_document, render_page};

#[allow(non_snake_case)]
fn LiveRoot() -> Element {
    use_context_provider(SiteConfig::default);
    rsx! { Landing {} }
}

fn render_live() -> String {
    let mut dom = VirtualDom::new(LiveRoot);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Text as the renderer escapes it inside element content.
fn escaped(text: &str) -> String {
    text.replace('&', "&#38;")
}

/// Markup of the first element opened by `open` and closed by `close`.
fn element<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html.find(open).unwrap_or_else(|| panic!("{open} not rendered"));
    let len = html[start..].find(close).unwrap_or_else(|| panic!("{close} not found"));
    &html[start..start + len]
}

#[test]
fn restricted_modules_never_render() {
    let html = render_page(&SiteConfig::default());

    for module in MODULES.iter().filter(|m| !m.visibility.is_public()) {
        assert!(!html.contains(module.name), "{} leaked onto the page", module.name);
        assert!(!html.contains(&format!("module={}", module.id)));
    }
    for module in public_modules() {
        assert!(html.contains(&escaped(module.name)), "{} missing", module.name);
    }
    assert!(html.contains("10 Powerful Modules, One Platform"));
}

#[test]
fn module_cards_list_only_three_features() {
    let html = render_page(&SiteConfig::default());

    assert!(html.contains("Bank Reconciliation"));
    assert!(html.contains("VAT Compliance"));
    assert!(!html.contains("Financial Reports"));
    assert!(!html.contains("System Settings"));
    assert!(!html.contains("Auto-Adjustments"));
}

#[test]
fn pricing_cards_list_every_feature() {
    let html = render_page(&SiteConfig::default());

    for plan in PRICING_PLANS {
        for feature in plan.features {
            assert!(html.contains(feature), "{} is missing {feature}", plan.name);
        }
    }
    assert_eq!(html.matches("Most Popular").count(), 1);
}

#[test]
fn prerendered_counters_show_final_values() {
    let html = render_page(&SiteConfig::default());

    for expected in ["10+", "50+", "99%", "24/7"] {
        assert!(html.contains(&format!(">{expected}</span>")), "counter {expected}");
    }
}

#[tokio::test]
async fn live_counters_start_from_zero() {
    let html = render_live();

    for expected in ["0+", "0%", "0/7"] {
        assert!(html.contains(&format!(">{expected}</span>")), "counter {expected}");
    }
}

#[tokio::test]
async fn mobile_menu_starts_closed() {
    let html = render_live();

    assert!(!html.contains("mobile-menu"));
    let toggle = element(&html, "<button", "</button>");
    assert!(toggle.contains("Toggle navigation"));
    assert!(toggle.contains("<svg"), "toggle button has no icon: {toggle}");
    assert!(toggle.contains(r#"data-icon="menu""#));
    assert!(toggle.contains("<path"));
}

#[test]
fn icons_render_as_inline_svg() {
    let html = render_page(&SiteConfig::default());

    assert!(!html.contains("<i "));
    assert!(html.contains(r#"viewBox="0 0 24 24""#));
    assert!(html.contains(r#"stroke="currentColor""#));
    for icon in ["sparkles", "car", "zap", "star", "mail"] {
        let open = format!(r#"data-icon="{icon}""#);
        assert!(html.contains(&open), "{icon} icon missing");
    }
    assert_eq!(html.matches(r#"data-icon="star""#).count(), TESTIMONIALS.len() * TESTIMONIAL_STARS);
}

#[test]
fn testimonials_quote_with_straight_quotes() {
    let html = render_page(&SiteConfig::default());

    assert!(!html.contains('\u{201c}') && !html.contains('\u{201d}'));
    for testimonial in TESTIMONIALS {
        let quoted = [
            format!("\"{}\"", testimonial.quote),
            format!("&#34;{}&#34;", testimonial.quote),
            format!("&quot;{}&quot;", testimonial.quote),
        ];
        assert!(
            quoted.iter().any(|q| html.contains(q.as_str())),
            "{} quote is not wrapped in straight quotes",
            testimonial.name
        );
        assert!(html.contains(&escaped(testimonial.role)));
    }
}

#[test]
fn links_follow_configured_base_url() {
    let mut site = SiteConfig::default();
    site.erp.base_url = "https://erp.example.com/".to_owned();
    site.contact.email = "sales@example.com".to_owned();

    let html = render_page(&site);

    assert!(html.contains(r#"href="https://erp.example.com/login""#));
    assert!(html.contains(r#"href="https://erp.example.com/knowledge-base?module=finance""#));
    assert!(html.contains(r#"href="mailto:sales@example.com""#));
    assert!(!html.contains("demo.vesla.ae"));
}

#[test]
fn document_wraps_page_with_head() {
    let doc = render_document(&SiteConfig::default());

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>Vesla ERP</title>"));
    assert!(doc.contains("cdn.tailwindcss.com"));
    assert!(doc.contains("Trusted by Industry Leaders"));
}
