//! Repository modules - Data access wrappers around port traits.
//!
//! Each repository wraps a port trait and provides the interface
//! use cases read and write through.

pub mod catalog;
pub mod plans;

pub use catalog::Catalog;
pub use plans::Plans;
