use std::collections::{BTreeSet, HashSet};

use platewise_shared::MealType;
use time::Date;

/// Parameters scoping one suggestion request.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionContext {
    pub target_date: Date,
    pub meal_type: MealType,
    pub selected_tags: BTreeSet<String>,
    pub search_query: String,
    /// Meal ids already scheduled in the active week
    pub existing_plan_ids: HashSet<String>,
}

impl SuggestionContext {
    pub fn new(target_date: Date, meal_type: MealType) -> Self {
        Self {
            target_date,
            meal_type,
            selected_tags: BTreeSet::new(),
            search_query: String::new(),
            existing_plan_ids: HashSet::new(),
        }
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn exclude<I, S>(mut self, meal_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_plan_ids.extend(meal_ids.into_iter().map(Into::into));
        self
    }
}
