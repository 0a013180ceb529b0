use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use vesla_domain::config::{
    ContactConfig, CounterConfig, ErpConfig, LogConfig, LogLevel, ServerConfig, SiteConfig,
};

#[test]
fn config_defaults_are_sane() {
    let erp = ErpConfig::default();
    assert_eq!(erp.base_url, "https://demo.vesla.ae");

    let contact = ContactConfig::default();
    assert_eq!(contact.email, "hello@vesla.ae");
    assert_eq!(contact.location, "Dubai, UAE");

    assert_eq!(CounterConfig::default().duration_ms, 2000);

    let server = ServerConfig::default();
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(server.port, 4590);
}

#[test]
fn site_config_deserializes_partial_input() {
    let raw = json!({
        "erp": { "base_url": "https://erp.example.com" },
        "counter": { "duration_ms": 500 },
        "server": { "address": "127.0.0.1", "port": 8080 }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.erp.base_url, "https://erp.example.com");
    assert_eq!(cfg.counter.duration(), std::time::Duration::from_millis(500));
    assert_eq!(cfg.server.port, 8080);
    // Sections left out fall back to their defaults.
    assert_eq!(cfg.contact, ContactConfig::default());
    assert_eq!(cfg.window.title, "Vesla ERP");
}

#[test]
fn clones_share_until_mutated() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.erp.base_url = "https://staging.vesla.ae".to_owned();

    assert_eq!(original.erp.base_url, "https://demo.vesla.ae");
    assert_eq!(edited.erp.base_url, "https://staging.vesla.ae");
}

#[test]
fn log_section_reads_level_and_directory() {
    let raw = json!({
        "log": { "level": "debug", "filter": "tower_http=warn", "directory": "logs", "json": true }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.log.level, LogLevel::Debug);
    assert_eq!(cfg.log.filter.as_deref(), Some("tower_http=warn"));
    assert_eq!(cfg.log.directory.as_deref(), Some(Path::new("logs")));
    assert!(cfg.log.json);
    assert_eq!(cfg.log.max_files, LogConfig::default().max_files);
}

#[test]
fn log_section_defaults_to_console_at_info() {
    let log = SiteConfig::default().log.clone();
    assert_eq!(log.level, LogLevel::Info);
    assert!(log.directory.is_none());
    assert!(!log.json);

    let unknown = serde_json::from_value::<LogConfig>(json!({ "level": "loud" }));
    assert!(unknown.is_err());
}
