mod date;
mod error;
pub mod meal;
pub mod mealplan;

pub use date::*;
pub use error::*;
pub use meal::{Ingredient, Meal, MealType};
pub use mealplan::MealPlanRecord;
