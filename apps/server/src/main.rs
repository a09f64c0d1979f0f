use anyhow::Context;
use ipnt::kernel::config::{DEFAULT_CONFIG_FILE, load_config_or_default};
use ipnt::domain::config::ApiConfig;
use ipnt_logger::Logger;
use ipnt_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig = load_config_or_default(Some(DEFAULT_CONFIG_FILE))
        .context("Critical: Configuration is malformed")?;

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).config(&cfg.log)?.init()?;

    Server::builder().config(cfg).build()?.run().await
}
