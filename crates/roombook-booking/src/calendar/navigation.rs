//! Navigation guard around an external calendar view.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info};

use roombook_core::result::AppResult;

/// The calendar widget the navigator drives.
pub trait CalendarView {
    /// The date the view is currently showing, if it has one.
    fn current_date(&self) -> AppResult<Option<NaiveDate>>;

    /// Moves the view to `date`.
    fn go_to(&mut self, date: NaiveDate) -> AppResult<()>;
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The view moved to the requested date and listeners were notified.
    Moved(NaiveDate),
    /// The request pointed before today; the view was reset to today.
    Vetoed {
        /// The refused date.
        requested: NaiveDate,
        /// The date the view was reset to.
        today: NaiveDate,
    },
}

type DateListener = Box<dyn FnMut(NaiveDate) + Send>;

/// Keeps a calendar view from moving into the past.
pub struct CalendarNavigator<V: CalendarView> {
    view: V,
    listeners: Vec<DateListener>,
}

impl<V: CalendarView + fmt::Debug> fmt::Debug for CalendarNavigator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarNavigator")
            .field("view", &self.view)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<V: CalendarView> CalendarNavigator<V> {
    /// Wraps `view`.
    pub fn new(view: V) -> Self {
        Self {
            view,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback for successful date changes.
    pub fn on_date_change(&mut self, listener: impl FnMut(NaiveDate) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Moves the view to `date` unless it lies before `today`.
    ///
    /// A vetoed move resets the view to `today` and notifies nobody.
    pub fn navigate(&mut self, date: NaiveDate, today: NaiveDate) -> AppResult<NavigationOutcome> {
        if date < today {
            info!(%date, %today, "Navigation to a past date vetoed");
            self.view.go_to(today)?;
            return Ok(NavigationOutcome::Vetoed {
                requested: date,
                today,
            });
        }

        self.view.go_to(date)?;
        debug!(%date, listeners = self.listeners.len(), "Calendar moved");
        for listener in &mut self.listeners {
            listener(date);
        }
        Ok(NavigationOutcome::Moved(date))
    }

    /// The wrapped view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Unwraps the view.
    pub fn into_inner(self) -> V {
        self.view
    }
}
