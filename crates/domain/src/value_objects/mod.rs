//! Value objects - Immutable objects defined by their attributes

mod rewards;

pub use rewards::{Rewards, CREDIT_WEIGHT_DIVISOR};
