//! Plan export bundle
//!
//! A bundle is one JSON document holding any number of saved plans, so
//! plans can be moved between stores or machines.

use chrono::{DateTime, Utc};
use questforge_domain::PlanRecord;
use serde::{Deserialize, Serialize};

/// Bumped whenever the bundle layout changes incompatibly.
pub const BUNDLE_FORMAT_VERSION: u32 = 1;

/// Exported plans plus metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBundle {
    pub metadata: BundleMetadata,
    pub plans: Vec<PlanRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleMetadata {
    pub format_version: u32,
    pub exported_at: DateTime<Utc>,
    pub plan_count: usize,
}

impl PlanBundle {
    pub fn new(plans: Vec<PlanRecord>, exported_at: DateTime<Utc>) -> Self {
        Self {
            metadata: BundleMetadata {
                format_version: BUNDLE_FORMAT_VERSION,
                exported_at,
                plan_count: plans.len(),
            },
            plans,
        }
    }
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Names stored, in bundle order
    pub imported: Vec<String>,
    pub skipped: Vec<SkippedPlan>,
}

/// A bundle entry that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPlan {
    /// Position of the entry in the bundle's `plans` array
    pub index: usize,
    /// The entry's name, when it had a readable one
    pub name: Option<String>,
    pub reason: String,
}
