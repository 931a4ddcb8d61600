use async_trait::async_trait;
use platewise_shared::{Meal, MealPlanRecord};
use time::Date;

/// Read-only access to every meal the user owns.
#[async_trait]
pub trait MealCatalog: Send + Sync {
    async fn meals(&self) -> anyhow::Result<Vec<Meal>>;
}

/// Read-only access to scheduled meals.
#[async_trait]
pub trait PlanHistory: Send + Sync {
    /// Plan records dated between `start` and `end`, both inclusive
    async fn records_between(&self, start: Date, end: Date)
    -> anyhow::Result<Vec<MealPlanRecord>>;
}
