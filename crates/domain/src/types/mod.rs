//! # Quest classification types
//!
//! Closed vocabularies for how a quest is classified and where it is in its
//! lifecycle. Catalog data arrives as strings; `FromStr` on each type is the
//! single place those strings are validated, so an unknown value fails at load
//! time instead of silently comparing unequal later.

mod classification;
pub use classification::{Difficulty, Priority};

mod quest_status;
pub use quest_status::QuestStatus;
