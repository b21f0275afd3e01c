//! Page-entry checks evaluated against the session.

pub mod policy;

pub use policy::{GlobalAuthCheck, GuardDecision, PUBLIC_PATHS, Route, RouteGuard};
