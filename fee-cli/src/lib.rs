pub mod config;
pub mod host;
pub mod logging;
pub mod utils;

pub use config::{AppConfig, ConfigError};
pub use host::{EstimatorPage, PageAction, PageOutcome, SessionOutcome, run_session};
