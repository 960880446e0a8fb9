// Domain layer: form models and ports (clock, notifier, reservation api).

pub mod model;
pub mod ports;
