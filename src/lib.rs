pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    clock::{FixedClock, SystemClock},
    http::ApiClient,
    notifier::ConsoleNotifier,
    reservation_api::ReservationService,
};
pub use config::AppConfig;
pub use crate::core::form::{ReservationForm, SubmitStatus};
pub use utils::error::{ReservationError, Result};
