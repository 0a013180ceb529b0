use vesla_domain::config::SiteConfig;
use vesla_logger::{Logger, LoggerError};

#[test]
fn second_init_in_one_process_is_rejected() {
    let site = SiteConfig::default();

    let first = Logger::builder()
        .name("vesla-desktop")
        .config(&site.log)
        .init()
        .expect("first init should succeed");
    assert!(!first.writes_files());

    let err = Logger::builder()
        .name("vesla-server")
        .config(&site.log)
        .init()
        .expect_err("the global subscriber is already set");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
