//! Configuration system
//!
//! Structures live in `schemas`, declared through the `config_struct!` macro;
//! loading and global access live in `utils`.

mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, DashboardConfig, EndpointConfig, WebserverConfig};
pub use utils::{
    get_config_clone, load_config_from_path, parse_config,
    read_config_file, with_config, CONFIG_FILE_PATH,
};
