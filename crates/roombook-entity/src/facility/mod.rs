//! Facility domain entities.

pub mod resource;

pub use resource::ResourceRef;
