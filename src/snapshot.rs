use std::path::Path;

use anyhow::Context;
use platewise_shared::{Meal, MealPlanRecord};
use platewise_suggestion::InMemoryStore;
use serde::{Deserialize, Serialize};

/// Catalog and plan records exported to a JSON file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub plans: Vec<MealPlanRecord>,
}

impl Snapshot {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;

        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;

        tracing::debug!(
            meals = snapshot.meals.len(),
            plans = snapshot.plans.len(),
            "snapshot loaded"
        );

        Ok(snapshot)
    }

    pub fn into_store(self) -> InMemoryStore {
        InMemoryStore::with_data(self.meals, self.plans)
    }
}
