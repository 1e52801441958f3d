/// Centralized argument handling system for FleetBoard
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Listing of --debug-<module> flags
/// - Value lookup for flags like --config <path>
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

// =============================================================================
// MODE FLAGS
// =============================================================================

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Run one refresh cycle, print it, exit
pub fn is_once_enabled() -> bool {
    has_arg("--once")
}

/// Config file path override (--config <path>)
pub fn config_path_override() -> Option<String> {
    get_arg_value("--config")
}

// =============================================================================
// DEBUG FLAGS
// =============================================================================

/// Collect every --debug-<module> key present on the command line
pub fn debug_flags() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--debug-"))
        .filter(|key| !key.is_empty())
        .map(|key| key.to_string())
        .collect()
}

pub fn print_help() {
    println!("FleetBoard - live fleet status dashboard");
    println!();
    println!("USAGE:");
    println!("    fleetboard [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>      Config file (default: data/config.toml)");
    println!("    --once               Run a single refresh cycle, print it and exit");
    println!("    --quiet              Only show warnings and errors");
    println!("    --verbose            Show verbose logs for every module");
    println!("    --verbose-<module>   Verbose logs for one module");
    println!("    --debug-<module>     Debug logs for one module (poller, fleet, webserver, config, http)");
    println!("    --no-log-file        Do not write logs/fleetboard.log");
    println!("    -h, --help           Print this help");
}
