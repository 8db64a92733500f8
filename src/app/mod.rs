pub mod cli;
pub mod config;
mod logging;

pub use logging::init_logging;
