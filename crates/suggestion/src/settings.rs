use platewise_shared::bail_settings;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// Upper bound for the magnitude of every configurable score term
pub const MAX_SCORE_MAGNITUDE: i32 = 1_000_000;

/// Penalty applied once a meal has been planned at least `min_uses` times
/// inside the lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTier {
    pub min_uses: u32,
    pub penalty: i32,
}

/// Scoring constants shared by the history aggregation and the score calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    pub base_score: i32,
    pub meal_type_bonus: i32,
    /// Trailing days of plan history considered for usage counts
    pub lookback_days: u32,
    /// Days around the target date in which a previous use is penalised
    pub recency_days: u32,
    pub recency_penalty: i32,
    pub max_results: usize,
    /// Sorted by `min_uses`, strictly ascending
    pub frequency_tiers: Vec<FrequencyTier>,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            base_score: 100,
            meal_type_bonus: 100,
            lookback_days: 30,
            recency_days: 7,
            recency_penalty: 50,
            max_results: 10,
            frequency_tiers: vec![
                FrequencyTier {
                    min_uses: 1,
                    penalty: 10,
                },
                FrequencyTier {
                    min_uses: 3,
                    penalty: 30,
                },
                FrequencyTier {
                    min_uses: 5,
                    penalty: 50,
                },
            ],
        }
    }
}

impl SuggestionSettings {
    pub fn validate(&self) -> platewise_shared::Result<()> {
        if self.max_results < 1 {
            bail_settings!("max_results must be at least 1");
        }

        if self.lookback_days < 1 {
            bail_settings!("lookback_days must be at least 1");
        }

        if self.recency_penalty < 0 || self.meal_type_bonus < 0 {
            bail_settings!("recency_penalty and meal_type_bonus must not be negative");
        }

        if self.base_score.unsigned_abs() > MAX_SCORE_MAGNITUDE.unsigned_abs()
            || self.meal_type_bonus > MAX_SCORE_MAGNITUDE
            || self.recency_penalty > MAX_SCORE_MAGNITUDE
        {
            bail_settings!(
                "base_score, meal_type_bonus and recency_penalty must stay within ±{}",
                MAX_SCORE_MAGNITUDE
            );
        }

        let mut previous = 0;
        for tier in &self.frequency_tiers {
            if tier.min_uses <= previous {
                bail_settings!(
                    "frequency tiers must have strictly ascending min_uses starting at 1, got {} after {}",
                    tier.min_uses,
                    previous
                );
            }

            if tier.penalty < 0 || tier.penalty > MAX_SCORE_MAGNITUDE {
                bail_settings!(
                    "frequency tier penalty must be between 0 and {}: {}",
                    MAX_SCORE_MAGNITUDE,
                    tier.penalty
                );
            }

            previous = tier.min_uses;
        }

        Ok(())
    }

    /// Penalty of the highest tier whose threshold `uses` reaches, 0 below the first tier.
    pub fn frequency_penalty(&self, uses: u32) -> i32 {
        self.frequency_tiers
            .iter()
            .rev()
            .find(|tier| uses >= tier.min_uses)
            .map(|tier| tier.penalty)
            .unwrap_or(0)
    }

    /// First day of the lookback window ending on `today`
    pub fn lookback_start(&self, today: Date) -> Date {
        today
            .checked_sub(Duration::days(self.lookback_days as i64))
            .unwrap_or(Date::MIN)
    }
}
