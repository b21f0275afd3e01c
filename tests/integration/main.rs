//! Integration tests across the RoomBook crates.

mod helpers;
mod session_test;
mod slot_test;
