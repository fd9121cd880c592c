//! Quest reward totals.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Credits are worth this many times less than experience when the two are
/// combined into a single reward value.
pub const CREDIT_WEIGHT_DIVISOR: f64 = 100.0;

/// Experience and credits granted by a quest, or summed over several quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewards {
    pub experience: u32,
    pub credits: u32,
}

impl Rewards {
    pub fn new(experience: u32, credits: u32) -> Self {
        Self {
            experience,
            credits,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.experience == 0 && self.credits == 0
    }

    /// Combined reward value: experience plus credits scaled down by
    /// [`CREDIT_WEIGHT_DIVISOR`].
    pub fn weighted_value(&self) -> f64 {
        f64::from(self.experience) + f64::from(self.credits) / CREDIT_WEIGHT_DIVISOR
    }

    /// Weighted value per minute, or 0 when no time is spent.
    pub fn efficiency(&self, minutes: u32) -> f64 {
        if minutes == 0 {
            0.0
        } else {
            self.weighted_value() / f64::from(minutes)
        }
    }
}

impl Add for Rewards {
    type Output = Rewards;

    fn add(self, rhs: Rewards) -> Rewards {
        Rewards {
            experience: self.experience.saturating_add(rhs.experience),
            credits: self.credits.saturating_add(rhs.credits),
        }
    }
}

impl AddAssign for Rewards {
    fn add_assign(&mut self, rhs: Rewards) {
        *self = *self + rhs;
    }
}

impl Sum for Rewards {
    fn sum<I: Iterator<Item = Rewards>>(iter: I) -> Self {
        iter.fold(Rewards::default(), Add::add)
    }
}
