//! Shared quest catalogs for unit tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{linear_catalog, planner_over};
//!
//! #[test]
//! fn chain_has_three_quests() {
//!     let planner = planner_over(linear_catalog());
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use questforge_domain::{Difficulty, Priority, Quest};

use crate::infrastructure::app_settings::PlannerSettings;
use crate::infrastructure::catalog::InMemoryCatalog;
use crate::infrastructure::ports::MockClockPort;
use crate::repositories::Catalog;
use crate::use_cases::planning::CompletionPlanner;

/// A bare quest named after its id.
pub fn quest(id: &str, prerequisites: &[&str]) -> Quest {
    Quest::new(id, id).with_prerequisites(prerequisites.iter().copied())
}

/// `c` needs `b` needs `a`, nothing completed.
///
/// | id | xp  | credits | difficulty |
/// |----|-----|---------|------------|
/// | a  | 100 | 50      | easy       |
/// | b  | 200 | 150     | medium     |
/// | c  | 300 | 600     | hard       |
pub fn linear_catalog() -> Vec<Quest> {
    vec![
        quest("a", &[])
            .with_rewards(100, 50)
            .with_difficulty(Difficulty::Easy),
        quest("b", &["a"])
            .with_rewards(200, 150)
            .with_difficulty(Difficulty::Medium),
        quest("c", &["b"])
            .with_rewards(300, 600)
            .with_difficulty(Difficulty::Hard),
    ]
}

/// A small town with independent errands at two locations.
pub fn town_catalog() -> Vec<Quest> {
    vec![
        quest("fetch_water", &[])
            .with_rewards(50, 20)
            .with_location("village")
            .with_priority(Priority::Low),
        quest("clear_rats", &[])
            .with_rewards(150, 100)
            .with_location("village")
            .with_priority(Priority::High),
        quest("guard_gate", &["clear_rats"])
            .with_rewards(400, 300)
            .with_location("village")
            .with_priority(Priority::High),
        quest("slay_drake", &[])
            .with_rewards(1200, 800)
            .with_location("mountain")
            .with_priority(Priority::Critical)
            .with_difficulty(Difficulty::Hard),
        quest("pick_herbs", &[])
            .with_rewards(80, 0)
            .with_location("mountain")
            .with_difficulty(Difficulty::Easy),
    ]
}

pub fn catalog_over(quests: Vec<Quest>) -> Arc<Catalog> {
    match InMemoryCatalog::new(quests) {
        Ok(catalog) => Arc::new(Catalog::new(Arc::new(catalog))),
        Err(e) => panic!("invalid fixture catalog: {e}"),
    }
}

pub fn planner_over(quests: Vec<Quest>) -> CompletionPlanner {
    CompletionPlanner::new(catalog_over(quests), PlannerSettings::default())
}

/// A clock stuck at `now`.
pub fn clock_at(now: DateTime<Utc>) -> MockClockPort {
    let mut clock = MockClockPort::new();
    clock.expect_now().return_const(now);
    clock
}
