//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    app_settings::PlannerSettings,
    clock::SystemClock,
    persistence::{InMemoryPlanStore, JsonFilePlanStore},
    ports::{ClockPort, PlanStore, QuestCatalog},
};
use crate::repositories;
use crate::use_cases;

/// Main application state.
///
/// Holds the repository wrappers and the use cases built on them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub settings: PlannerSettings,
}

/// Container for all repository modules.
pub struct Repositories {
    pub catalog: Arc<repositories::Catalog>,
    pub plans: Arc<repositories::Plans>,
}

/// Container for all use cases.
pub struct UseCases {
    pub planner: use_cases::CompletionPlanner,
    pub library: use_cases::PlanLibrary,
}

impl App {
    /// Compose the application from its ports.
    pub fn new(
        catalog: Arc<dyn QuestCatalog>,
        plan_store: Arc<dyn PlanStore>,
        clock: Arc<dyn ClockPort>,
        settings: PlannerSettings,
    ) -> Self {
        let repositories = Repositories {
            catalog: Arc::new(repositories::Catalog::new(catalog)),
            plans: Arc::new(repositories::Plans::new(plan_store, clock)),
        };

        let use_cases = UseCases {
            planner: use_cases::CompletionPlanner::new(
                repositories.catalog.clone(),
                settings.clone(),
            ),
            library: use_cases::PlanLibrary::new(repositories.plans.clone()),
        };

        Self {
            repositories,
            use_cases,
            settings,
        }
    }

    /// Compose the application with the stores named by `settings`.
    ///
    /// Plans go to a JSON file when `plan_store_path` is set, otherwise they
    /// are kept in memory.
    pub fn from_settings(catalog: Arc<dyn QuestCatalog>, settings: PlannerSettings) -> Self {
        let plan_store: Arc<dyn PlanStore> = match &settings.plan_store_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using JSON file plan store");
                Arc::new(JsonFilePlanStore::new(path.clone()))
            }
            None => {
                tracing::info!("Using in-memory plan store");
                Arc::new(InMemoryPlanStore::new())
            }
        };
        Self::new(catalog, plan_store, Arc::new(SystemClock::new()), settings)
    }
}
