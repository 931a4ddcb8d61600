use std::collections::HashMap;

use platewise_shared::MealPlanRecord;
use time::Date;

use crate::SuggestionSettings;

/// How often and how lately a meal was planned inside the lookback window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealUsageHistory {
    pub uses: u32,
    pub last_planned: Option<Date>,
}

impl MealUsageHistory {
    fn record(&mut self, date: Date) {
        self.uses += 1;
        if self.last_planned.is_none_or(|last| date > last) {
            self.last_planned = Some(date);
        }
    }
}

pub type UsageMap = HashMap<String, MealUsageHistory>;

/// Builds per-meal usage summaries from plan records.
///
/// Only records dated within `[today - lookback_days, today]` are counted. Records
/// pointing at meals that no longer exist are kept; nothing ever looks them up.
pub struct HistoryAggregator;

impl HistoryAggregator {
    pub fn aggregate(
        records: &[MealPlanRecord],
        today: Date,
        settings: &SuggestionSettings,
    ) -> UsageMap {
        let start = settings.lookback_start(today);
        let mut usage = UsageMap::new();

        for record in records
            .iter()
            .filter(|r| start <= r.date && r.date <= today)
        {
            usage
                .entry(record.meal_id.to_owned())
                .or_default()
                .record(record.date);
        }

        usage
    }
}
