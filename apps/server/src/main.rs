use anyhow::Context;
use std::path::Path;
use vesla::domain::config::SiteConfig;
use vesla::kernel::config::load_config;
use vesla_logger::Logger;
use vesla_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: SiteConfig =
        load_config(None::<&Path>).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).config(&cfg.log).init()?;

    Server::builder().config(cfg).build().run().await
}
