use anyhow::Result;

use traywise::{cli, config::AppConfig, i18n, init_common, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::parse_args();

    init_common();

    let config = AppConfig::resolve(&matches)?;
    i18n::init_i18n(config.locale.as_deref());

    if let Err(err) = tui::start(config).await {
        log::error!("TUI exited with error: {err:#}");
        return Err(err);
    }
    Ok(())
}
