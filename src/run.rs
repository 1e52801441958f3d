use crate::{
    config::{self, Config},
    fleet::{classify::format_clock, EndpointRegistry, HttpStatusFetcher, RefreshLoop, ViewSlot},
    logger::{self, LogTag},
    render,
    shutdown::{self, SHUTDOWN},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

/// Load the config file (honouring `--config`) into the global config
pub fn load_configuration() -> Result<Config> {
    let path = crate::arguments::config_path_override()
        .unwrap_or_else(|| config::CONFIG_FILE_PATH.to_string());

    config::load_config_from_path(&path)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Failed to load configuration from {}", path))?;

    logger::debug(LogTag::Config, &format!("Configuration loaded from {}", path));
    Ok(config::get_config_clone())
}

/// Registry, fetcher, slot and refresh loop wired from `config`
pub fn build_refresh_loop(config: &Config) -> Result<Arc<RefreshLoop>> {
    let registry = EndpointRegistry::from_config(&config.endpoints)
        .context("Invalid [[endpoints]] configuration")?;
    if registry.is_empty() {
        logger::warning(
            LogTag::Config,
            "No endpoints configured; the dashboard will stay DISCONNECTED",
        );
    }

    let fetcher =
        HttpStatusFetcher::new(&config.dashboard).context("Failed to build status fetcher")?;

    Ok(Arc::new(RefreshLoop::new(
        Arc::new(registry),
        Arc::new(fetcher),
        Arc::new(ViewSlot::new()),
    )))
}

/// `--once`: one cycle, printed to stdout
pub async fn run_once(config: &Config) -> Result<()> {
    let refresh = build_refresh_loop(config)?;
    refresh.run_cycle().await;

    let published = refresh
        .slot()
        .latest()
        .context("Refresh cycle finished without publishing a view")?;

    let clock = format_clock(&published.published_at.with_timezone(&chrono::Local));
    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
    println!("{}", render::render_view(&published.view, &clock, colorize));
    Ok(())
}

/// Refresh loop plus webserver until Ctrl-C
pub async fn run_dashboard(config: &Config) -> Result<()> {
    shutdown::install_ctrlc_handler().map_err(anyhow::Error::msg)?;

    let refresh = build_refresh_loop(config)?;
    let shutdown = Arc::clone(&SHUTDOWN);

    #[cfg(feature = "web")]
    let webserver = if config.webserver.enabled {
        let webserver_config = config.webserver.clone();
        let slot = Arc::clone(refresh.slot());
        let shutdown = Arc::clone(&shutdown);
        Some(tokio::spawn(async move {
            let result =
                crate::webserver::start_server(webserver_config, slot, Arc::clone(&shutdown)).await;
            if let Err(e) = result {
                logger::error(LogTag::Webserver, &e);
                // the dashboard has no other output surface
                shutdown.trigger();
            }
        }))
    } else {
        logger::info(LogTag::Webserver, "Webserver disabled in config");
        None
    };

    let period = Duration::from_millis(config.dashboard.refresh_interval_ms.max(1));
    Arc::clone(&refresh).run(period, Arc::clone(&shutdown)).await;

    #[cfg(feature = "web")]
    {
        if let Some(handle) = webserver {
            if let Err(e) = handle.await {
                logger::error(LogTag::Webserver, &format!("Webserver task failed: {}", e));
            }
        }
    }

    logger::info(LogTag::System, "FleetBoard stopped");
    Ok(())
}
