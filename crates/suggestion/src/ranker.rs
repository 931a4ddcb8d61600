use platewise_shared::{Meal, MealPlanRecord};
use serde::Serialize;
use strum::Display;
use time::Date;

use crate::{
    HistoryAggregator, ScoreCalculator, SuggestionContext, SuggestionFilter, SuggestionScore,
    SuggestionSettings,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSuggestion {
    pub meal: Meal,
    pub score: SuggestionScore,
    pub reasons: Vec<String>,
    pub last_planned: Option<Date>,
    pub uses: u32,
}

impl MealSuggestion {
    pub fn total(&self) -> i32 {
        self.score.total()
    }
}

/// Why a successful request produced no suggestions.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The catalog holds no meals at all
    NoMeals,
    /// Meals exist but none pass the tag and search filters
    NoMatches,
    /// Every matching meal is already scheduled this week
    AllPlanned,
}

impl EmptyReason {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::NoMeals => "You have no meals yet",
            EmptyReason::NoMatches => "No meals match your filters",
            EmptyReason::AllPlanned => "All matching meals are already planned this week",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions {
    Ready(Vec<MealSuggestion>),
    Empty(EmptyReason),
}

impl Suggestions {
    pub fn items(&self) -> &[MealSuggestion] {
        match self {
            Suggestions::Ready(items) => items,
            Suggestions::Empty(_) => &[],
        }
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Suggestions::Ready(_) => None,
            Suggestions::Empty(reason) => Some(*reason),
        }
    }
}

/// Runs one suggestion pass: aggregate history, filter, score, sort and truncate.
///
/// Ordering is by total score descending, then meal name ascending
/// (case-insensitive), then meal id, so identical input always yields the
/// same list.
pub struct SuggestionRanker;

impl SuggestionRanker {
    pub fn rank(
        catalog: &[Meal],
        records: &[MealPlanRecord],
        context: &SuggestionContext,
        today: Date,
        settings: &SuggestionSettings,
    ) -> Suggestions {
        if catalog.is_empty() {
            return Suggestions::Empty(EmptyReason::NoMeals);
        }

        let filtered = SuggestionFilter::apply(catalog, context);
        if filtered.matched == 0 {
            return Suggestions::Empty(EmptyReason::NoMatches);
        }

        if filtered.candidates.is_empty() {
            return Suggestions::Empty(EmptyReason::AllPlanned);
        }

        let usage = HistoryAggregator::aggregate(records, today, settings);

        let mut suggestions = filtered
            .candidates
            .into_iter()
            .map(|meal| {
                let history = usage.get(&meal.id);

                MealSuggestion {
                    meal: meal.clone(),
                    score: ScoreCalculator::score(meal, context, history, settings),
                    reasons: ScoreCalculator::reasons(meal, context, history, settings),
                    last_planned: history.and_then(|h| h.last_planned),
                    uses: history.map(|h| h.uses).unwrap_or(0),
                }
            })
            .map(|suggestion| (suggestion.meal.name.to_lowercase(), suggestion))
            .collect::<Vec<_>>();

        suggestions.sort_by(|(a_name, a), (b_name, b)| {
            b.total()
                .cmp(&a.total())
                .then_with(|| a_name.cmp(b_name))
                .then_with(|| a.meal.id.cmp(&b.meal.id))
        });

        Suggestions::Ready(
            suggestions
                .into_iter()
                .take(settings.max_results)
                .map(|(_, suggestion)| suggestion)
                .collect(),
        )
    }
}
