pub mod booking;
pub mod form;
pub mod schedule;
pub mod validator;

pub use crate::domain::model::{
    Field, FieldErrors, Guests, ReservationPayload, ReservationRequest, SubmissionOutcome,
    TimeSlot, TouchedSet,
};
pub use crate::domain::ports::{Clock, Notifier, ReservationApi};
pub use crate::utils::error::Result;
