//! # RoomBook Booking
//!
//! Client-side booking rules: the slot validator with its maintenance
//! index, calendar date handling, and request construction for the
//! booking API.

pub mod calendar;
pub mod maintenance;
pub mod request;
pub mod validator;

pub use calendar::{CalendarNavigator, CalendarView, NavigationOutcome};
pub use maintenance::{MaintenanceIndex, MaintenanceKey, MaintenanceSnapshot};
pub use request::{BookingDetails, build_request};
pub use validator::{SlotRejection, SlotValidator, is_cell_booked, is_past};
