use fleetboard::{
    arguments::{debug_flags, is_help_requested, is_once_enabled, print_help},
    logger::{self as logger, LogTag},
    run,
};

/// Main entry point for FleetBoard
///
/// - `--help`: print usage and exit
/// - `--once`: run a single refresh cycle, print the dashboard, exit
/// - default: refresh loop plus webserver until Ctrl-C
#[tokio::main]
async fn main() {
    // Check for help request first (before any other processing)
    if is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::init();

    let flags = debug_flags();
    if !flags.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug enabled for: {}", flags.join(", ")),
        );
    }

    let config = match run::load_configuration() {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::Config, &format!("{:#}", e));
            logger::flush();
            std::process::exit(1);
        }
    };

    let result = if is_once_enabled() {
        run::run_once(&config).await
    } else {
        logger::info(
            LogTag::System,
            &format!(
                "FleetBoard starting ({} endpoints, refresh every {}ms)",
                config.endpoints.len(),
                config.dashboard.refresh_interval_ms
            ),
        );
        run::run_dashboard(&config).await
    };

    if let Err(e) = result {
        logger::error(LogTag::System, &format!("FleetBoard failed: {:#}", e));
        logger::flush();
        std::process::exit(1);
    }

    logger::flush();
}
