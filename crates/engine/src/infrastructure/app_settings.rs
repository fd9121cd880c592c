//! Planner settings
//!
//! Settings are read from the environment, optionally seeded from `.env.local`
//! and `.env` in the working directory. Every value has a default, so an empty
//! environment yields a working configuration.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `QUESTFORGE_MINUTES_PER_QUEST` | 30 |
//! | `QUESTFORGE_RECOMMENDATION_LIMIT` | 10 |
//! | `QUESTFORGE_PLAN_STORE_PATH` | unset (plans kept in memory) |

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_QUEST_VAR: &str = "QUESTFORGE_MINUTES_PER_QUEST";
pub const RECOMMENDATION_LIMIT_VAR: &str = "QUESTFORGE_RECOMMENDATION_LIMIT";
pub const PLAN_STORE_PATH_VAR: &str = "QUESTFORGE_PLAN_STORE_PATH";

fn default_minutes_per_quest() -> u32 {
    30
}

fn default_recommendation_limit() -> usize {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlannerSettings {
    /// Estimated time to finish any one quest
    #[serde(default = "default_minutes_per_quest")]
    pub minutes_per_quest: u32,
    /// Maximum number of recommendations returned
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    /// Where saved plans are written; `None` keeps them in memory
    #[serde(default)]
    pub plan_store_path: Option<PathBuf>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            minutes_per_quest: default_minutes_per_quest(),
            recommendation_limit: default_recommendation_limit(),
            plan_store_path: None,
        }
    }
}

impl PlannerSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        load_dotenv(Path::new("."));
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = non_empty(lookup(MINUTES_PER_QUEST_VAR)) {
            settings.minutes_per_quest = raw
                .parse()
                .with_context(|| format!("{MINUTES_PER_QUEST_VAR} must be a whole number, got {raw:?}"))?;
        }
        if let Some(raw) = non_empty(lookup(RECOMMENDATION_LIMIT_VAR)) {
            settings.recommendation_limit = raw
                .parse()
                .with_context(|| format!("{RECOMMENDATION_LIMIT_VAR} must be a whole number, got {raw:?}"))?;
        }
        if let Some(raw) = non_empty(lookup(PLAN_STORE_PATH_VAR)) {
            settings.plan_store_path = Some(PathBuf::from(raw));
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.minutes_per_quest > 0,
            "{MINUTES_PER_QUEST_VAR} must be greater than zero"
        );
        ensure!(
            self.recommendation_limit > 0,
            "{RECOMMENDATION_LIMIT_VAR} must be greater than zero"
        );
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load `.env.local` then `.env` from `dir`. Values already set win.
fn load_dotenv(dir: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let settings = PlannerSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, PlannerSettings::default());
        assert_eq!(settings.minutes_per_quest, 30);
        assert_eq!(settings.recommendation_limit, 10);
    }

    #[test]
    fn reads_overrides() {
        let settings = PlannerSettings::from_lookup(lookup(&[
            (MINUTES_PER_QUEST_VAR, "45"),
            (RECOMMENDATION_LIMIT_VAR, " 5 "),
            (PLAN_STORE_PATH_VAR, "/tmp/plans.json"),
        ]))
        .unwrap();
        assert_eq!(settings.minutes_per_quest, 45);
        assert_eq!(settings.recommendation_limit, 5);
        assert_eq!(
            settings.plan_store_path,
            Some(PathBuf::from("/tmp/plans.json"))
        );
    }

    #[test]
    fn rejects_garbage_and_zero() {
        let err = PlannerSettings::from_lookup(lookup(&[(MINUTES_PER_QUEST_VAR, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(MINUTES_PER_QUEST_VAR));

        assert!(PlannerSettings::from_lookup(lookup(&[(MINUTES_PER_QUEST_VAR, "0")])).is_err());
    }

    #[test]
    fn deserializes_partial_config() {
        let settings: PlannerSettings =
            serde_json::from_str(r#"{"minutes_per_quest": 20}"#).unwrap();
        assert_eq!(settings.minutes_per_quest, 20);
        assert_eq!(settings.recommendation_limit, 10);
    }
}
