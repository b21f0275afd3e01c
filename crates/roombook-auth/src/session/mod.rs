//! Session state: the bearer token and the claims derived from it.

pub mod manager;

pub use manager::SessionManager;
