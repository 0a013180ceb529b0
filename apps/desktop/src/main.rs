#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use std::path::Path;
use vesla::domain::config::SiteConfig;
use vesla::kernel::config::load_config;
use vesla_desktop::DesktopApp;
use vesla_logger::Logger;

fn main() -> anyhow::Result<()> {
    let site: SiteConfig =
        load_config(None::<&Path>).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).config(&site.log).init()?;
    tracing::info!(erp = %site.erp.base_url, "Launching desktop window");

    DesktopApp::from_window(&site.window).launch(site);

    Ok(())
}
