mod server;

pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

// Public API for starting the webserver
pub use server::{bind, serve, start_server};
