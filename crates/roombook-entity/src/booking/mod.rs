//! Booking domain entities.

pub mod event;
pub mod interval;
pub mod request;
pub mod status;

pub use event::{CalendarEvent, EventProps};
pub use interval::TimeInterval;
pub use request::BookingRequest;
pub use status::BookingStatus;
