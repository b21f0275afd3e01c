//! Calendar date handling and navigation.

pub mod dates;
pub mod navigation;

pub use dates::{
    current_calendar_date, format_api_date, normalize_date, parse_local_datetime, today_in,
};
pub use navigation::{CalendarNavigator, CalendarView, NavigationOutcome};
