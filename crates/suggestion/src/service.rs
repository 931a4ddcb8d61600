use platewise_shared::{Error, Meal, MealPlanRecord, Result};
use time::Date;

use crate::{
    HistoryAggregator, MealCatalog, MealUsageHistory, PlanHistory, SuggestionContext,
    SuggestionRanker, SuggestionSettings, Suggestions,
};

/// Usage summary of one meal, named when the meal still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct MealUsage {
    pub meal_id: String,
    pub name: Option<String>,
    pub history: MealUsageHistory,
}

/// Loads catalog and plan history from their sources and runs the ranker.
///
/// Source failures are returned as-is; retrying is left to the caller.
pub struct SuggestionService<C, H> {
    catalog: C,
    history: H,
    settings: SuggestionSettings,
}

impl<C: MealCatalog, H: PlanHistory> SuggestionService<C, H> {
    pub fn new(catalog: C, history: H, settings: SuggestionSettings) -> Self {
        Self {
            catalog,
            history,
            settings,
        }
    }

    pub fn settings(&self) -> &SuggestionSettings {
        &self.settings
    }

    async fn load_catalog(&self) -> Result<Vec<Meal>> {
        self.catalog.meals().await.map_err(Error::Catalog)
    }

    async fn load_history(&self, today: Date) -> Result<Vec<MealPlanRecord>> {
        self.history
            .records_between(self.settings.lookback_start(today), today)
            .await
            .map_err(Error::History)
    }

    #[tracing::instrument(
        skip_all,
        fields(
            meal_type = %context.meal_type,
            target_date = %context.target_date,
            today = %today,
        )
    )]
    pub async fn suggest(&self, context: &SuggestionContext, today: Date) -> Result<Suggestions> {
        let (catalog, records) =
            futures::try_join!(self.load_catalog(), self.load_history(today)).inspect_err(
                |err| tracing::error!(error = %err, "failed to load suggestion inputs"),
            )?;

        let suggestions =
            SuggestionRanker::rank(&catalog, &records, context, today, &self.settings);

        match &suggestions {
            Suggestions::Ready(items) => tracing::debug!(
                catalog = catalog.len(),
                records = records.len(),
                suggestions = items.len(),
                "suggestions ranked"
            ),
            Suggestions::Empty(reason) => tracing::debug!(
                catalog = catalog.len(),
                reason = %reason,
                "no suggestions"
            ),
        }

        Ok(suggestions)
    }

    /// Per-meal usage within the lookback window, most used first then by name.
    #[tracing::instrument(skip(self))]
    pub async fn usage(&self, today: Date) -> Result<Vec<MealUsage>> {
        let (catalog, records) =
            futures::try_join!(self.load_catalog(), self.load_history(today))?;

        let mut usage = HistoryAggregator::aggregate(&records, today, &self.settings)
            .into_iter()
            .map(|(meal_id, history)| MealUsage {
                name: catalog
                    .iter()
                    .find(|m| m.id == meal_id)
                    .map(|m| m.name.to_owned()),
                meal_id,
                history,
            })
            .collect::<Vec<_>>();

        usage.sort_by(|a, b| {
            b.history
                .uses
                .cmp(&a.history.uses)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.meal_id.cmp(&b.meal_id))
        });

        Ok(usage)
    }
}
