//! Questforge engine library.
//!
//! Quest dependency analysis and completion planning over a host-owned
//! quest catalog.
//!
//! ## Structure
//!
//! - `repositories/` - Wrappers around the catalog and plan store ports
//! - `use_cases/` - Dependency analysis, planning and the plan library
//! - `infrastructure/` - Ports, adapters, settings and logging setup
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

/// Shared catalogs for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
