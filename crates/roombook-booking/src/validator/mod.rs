//! Accepts or rejects a candidate booking slot.

pub mod rejection;
pub mod rules;
pub mod slot;

pub use rejection::SlotRejection;
pub use rules::{is_cell_booked, is_past};
pub use slot::SlotValidator;
