use serde::{Deserialize, Serialize};
use time::Date;

use crate::MealType;

/// One scheduling of a meal into a slot on a given day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealPlanRecord {
    pub id: String,
    pub meal_id: String,
    pub date: Date,
    pub meal_type: MealType,
}

impl MealPlanRecord {
    pub fn new(
        id: impl Into<String>,
        meal_id: impl Into<String>,
        date: Date,
        meal_type: MealType,
    ) -> Self {
        Self {
            id: id.into(),
            meal_id: meal_id.into(),
            date,
            meal_type,
        }
    }
}
