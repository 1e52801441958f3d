pub mod arguments;
pub mod config;
pub mod errors; // Structured error types
pub mod fleet; // Poll / aggregate / publish pipeline
pub mod logger;
pub mod render;
pub mod run;
pub mod shutdown;

#[cfg(feature = "web")]
pub mod webserver;
