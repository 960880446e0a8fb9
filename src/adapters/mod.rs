// Adapters layer: concrete implementations for external systems (http, clock, notifications).

pub mod clock;
pub mod http;
pub mod notifier;
pub mod reservation_api;
