use platewise_shared::{Meal, days_between};
use serde::Serialize;

use crate::{MealUsageHistory, SuggestionContext, SuggestionSettings};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionScore {
    pub base: i32,
    pub meal_type_bonus: i32,
    pub frequency_penalty: i32,
    pub recency_penalty: i32,
}

impl SuggestionScore {
    /// Signed total; negative values are kept, ranking relies on them too.
    /// Saturates at the `i32` bounds for settings that skipped validation.
    pub fn total(&self) -> i32 {
        self.base
            .saturating_add(self.meal_type_bonus)
            .saturating_sub(self.frequency_penalty)
            .saturating_sub(self.recency_penalty)
    }
}

/// Scores a single meal for a request.
///
/// Formula:
/// total = base + meal_type_bonus - frequency_penalty - recency_penalty
///
/// - meal_type_bonus: granted when the meal is tagged with the requested meal type
/// - frequency_penalty: tiered on uses inside the lookback window
/// - recency_penalty: last use within `recency_days` of the target date
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn score(
        meal: &Meal,
        context: &SuggestionContext,
        history: Option<&MealUsageHistory>,
        settings: &SuggestionSettings,
    ) -> SuggestionScore {
        let meal_type_bonus = if meal.is_meal_type(context.meal_type) {
            settings.meal_type_bonus
        } else {
            0
        };

        let uses = history.map(|h| h.uses).unwrap_or(0);

        SuggestionScore {
            base: settings.base_score,
            meal_type_bonus,
            frequency_penalty: settings.frequency_penalty(uses),
            recency_penalty: if Self::is_recent(context, history, settings) {
                settings.recency_penalty
            } else {
                0
            },
        }
    }

    fn is_recent(
        context: &SuggestionContext,
        history: Option<&MealUsageHistory>,
        settings: &SuggestionSettings,
    ) -> bool {
        history
            .and_then(|h| h.last_planned)
            .map(|last| days_between(last, context.target_date).abs() <= settings.recency_days as i64)
            .unwrap_or(false)
    }

    /// Human-readable annotations shown next to a suggestion. They never affect ranking.
    ///
    /// # Example Reasons
    /// - "Matches dinner"
    /// - "New to your plan"
    /// - "Not planned recently"
    /// - "Planned 3 times in the last 30 days"
    pub fn reasons(
        meal: &Meal,
        context: &SuggestionContext,
        history: Option<&MealUsageHistory>,
        settings: &SuggestionSettings,
    ) -> Vec<String> {
        let mut reasons = Vec::new();

        if meal.is_meal_type(context.meal_type) {
            reasons.push(format!("Matches {}", context.meal_type));
        }

        let uses = history.map(|h| h.uses).unwrap_or(0);
        if uses == 0 {
            reasons.push("New to your plan".to_owned());
            return reasons;
        }

        if Self::is_recent(context, history, settings) {
            reasons.push("Planned recently".to_owned());
        } else {
            reasons.push("Not planned recently".to_owned());
        }

        if settings.frequency_penalty(uses) > 0 {
            let times = match uses {
                1 => "once".to_owned(),
                2 => "twice".to_owned(),
                n => format!("{n} times"),
            };
            reasons.push(format!(
                "Planned {times} in the last {} days",
                settings.lookback_days
            ));
        }

        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platewise_shared::MealType;
    use time::{Date, macros::date};

    const TARGET: Date = date!(2025 - 03 - 20);

    fn context() -> SuggestionContext {
        SuggestionContext::new(TARGET, MealType::Dinner)
    }

    fn history(uses: u32, last_planned: Option<Date>) -> MealUsageHistory {
        MealUsageHistory { uses, last_planned }
    }

    fn score(meal: &Meal, history: Option<&MealUsageHistory>) -> SuggestionScore {
        ScoreCalculator::score(meal, &context(), history, &SuggestionSettings::default())
    }

    #[test]
    fn test_base_only() {
        let meal = Meal::new("1", "Salad").with_tags(["lunch"]);

        assert_eq!(score(&meal, None).total(), 100);
    }

    #[test]
    fn test_meal_type_bonus() {
        let meal = Meal::new("1", "Roast").with_tags(["Dinner"]);
        let result = score(&meal, None);

        assert_eq!(result.meal_type_bonus, 100);
        assert_eq!(result.total(), 200);
    }

    #[test]
    fn test_frequency_tiers_relative_to_unused() {
        let meal = Meal::new("1", "Stew");
        let old = Some(date!(2025 - 03 - 01));
        let unused = score(&meal, None).total();

        assert_eq!(unused - score(&meal, Some(&history(2, old))).total(), 10);
        assert_eq!(unused - score(&meal, Some(&history(4, old))).total(), 30);
        assert_eq!(unused - score(&meal, Some(&history(5, old))).total(), 50);
    }

    #[test]
    fn test_recency_penalty() {
        let meal = Meal::new("1", "Tacos");

        let recent = score(&meal, Some(&history(1, Some(date!(2025 - 03 - 17)))));
        assert_eq!(recent.recency_penalty, 50);

        let older = score(&meal, Some(&history(1, Some(date!(2025 - 03 - 10)))));
        assert_eq!(older.recency_penalty, 0);
    }

    #[test]
    fn test_recency_threshold_is_inclusive() {
        let meal = Meal::new("1", "Tacos");

        let seven = score(&meal, Some(&history(1, Some(date!(2025 - 03 - 13)))));
        assert_eq!(seven.recency_penalty, 50);

        let eight = score(&meal, Some(&history(1, Some(date!(2025 - 03 - 12)))));
        assert_eq!(eight.recency_penalty, 0);
    }

    #[test]
    fn test_total_may_be_negative() {
        let settings = SuggestionSettings {
            base_score: 10,
            ..Default::default()
        };
        let meal = Meal::new("1", "Pizza");
        let result = ScoreCalculator::score(
            &meal,
            &context(),
            Some(&history(6, Some(TARGET))),
            &settings,
        );

        assert_eq!(result.total(), 10 - 50 - 50);
    }

    #[test]
    fn test_total_saturates_on_unvalidated_settings() {
        let settings = SuggestionSettings {
            base_score: i32::MAX - 50,
            ..Default::default()
        };
        let meal = Meal::new("1", "Roast").with_tags(["dinner"]);
        let result = ScoreCalculator::score(&meal, &context(), None, &settings);

        assert_eq!(result.total(), i32::MAX);
    }

    #[test]
    fn test_reasons_for_new_matching_meal() {
        let meal = Meal::new("1", "Roast").with_tags(["dinner"]);
        let reasons =
            ScoreCalculator::reasons(&meal, &context(), None, &SuggestionSettings::default());

        assert_eq!(reasons, vec!["Matches dinner", "New to your plan"]);
    }

    #[test]
    fn test_reasons_for_used_meal() {
        let meal = Meal::new("1", "Roast");
        let settings = SuggestionSettings::default();

        let stale = history(3, Some(date!(2025 - 03 - 01)));
        assert_eq!(
            ScoreCalculator::reasons(&meal, &context(), Some(&stale), &settings),
            vec!["Not planned recently", "Planned 3 times in the last 30 days"]
        );

        let fresh = history(1, Some(date!(2025 - 03 - 19)));
        assert_eq!(
            ScoreCalculator::reasons(&meal, &context(), Some(&fresh), &settings),
            vec!["Planned recently", "Planned once in the last 30 days"]
        );
    }
}
