use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use platewise_shared::{Meal, MealPlanRecord, week_of};
use time::Date;
use tokio::sync::{RwLock, watch};

use crate::{MealCatalog, PlanHistory};

#[derive(Default)]
struct Inner {
    meals: BTreeMap<String, Meal>,
    plans: BTreeMap<String, MealPlanRecord>,
}

/// In-process meal catalog and planning store.
///
/// Every mutation bumps a revision counter so suggestion feeds can recompute.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);

        Self {
            inner: Arc::default(),
            revision: Arc::new(revision),
        }
    }

    pub fn with_data(
        meals: impl IntoIterator<Item = Meal>,
        plans: impl IntoIterator<Item = MealPlanRecord>,
    ) -> Self {
        let inner = Inner {
            meals: meals.into_iter().map(|m| (m.id.to_owned(), m)).collect(),
            plans: plans.into_iter().map(|p| (p.id.to_owned(), p)).collect(),
        };
        let (revision, _) = watch::channel(0);

        Self {
            inner: Arc::new(RwLock::new(inner)),
            revision: Arc::new(revision),
        }
    }

    /// Receiver notified after every mutation
    pub fn revision(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    pub async fn upsert_meal(&self, meal: Meal) {
        self.inner
            .write()
            .await
            .meals
            .insert(meal.id.to_owned(), meal);
        self.bump();
    }

    pub async fn remove_meal(&self, meal_id: &str) -> Option<Meal> {
        let removed = self.inner.write().await.meals.remove(meal_id);
        if removed.is_some() {
            self.bump();
        }

        removed
    }

    pub async fn schedule(&self, record: MealPlanRecord) {
        self.inner
            .write()
            .await
            .plans
            .insert(record.id.to_owned(), record);
        self.bump();
    }

    pub async fn unschedule(&self, record_id: &str) -> Option<MealPlanRecord> {
        let removed = self.inner.write().await.plans.remove(record_id);
        if removed.is_some() {
            self.bump();
        }

        removed
    }

    /// Meal ids scheduled in the Monday to Sunday week containing `date`
    pub async fn planned_in_week(&self, date: Date) -> HashSet<String> {
        let week = week_of(date);

        self.inner
            .read()
            .await
            .plans
            .values()
            .filter(|p| week.contains(p.date))
            .map(|p| p.meal_id.to_owned())
            .collect()
    }
}

#[async_trait]
impl MealCatalog for InMemoryStore {
    async fn meals(&self) -> anyhow::Result<Vec<Meal>> {
        Ok(self.inner.read().await.meals.values().cloned().collect())
    }
}

#[async_trait]
impl PlanHistory for InMemoryStore {
    async fn records_between(
        &self,
        start: Date,
        end: Date,
    ) -> anyhow::Result<Vec<MealPlanRecord>> {
        Ok(self
            .inner
            .read()
            .await
            .plans
            .values()
            .filter(|p| start <= p.date && p.date <= end)
            .cloned()
            .collect())
    }
}
