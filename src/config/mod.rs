pub mod app_config;
#[cfg(feature = "cli")]
pub mod cli;

pub use app_config::AppConfig;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
