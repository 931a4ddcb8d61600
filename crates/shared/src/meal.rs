use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Time-of-day bucket a meal can be scheduled into.
#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Whether `tag` names this meal type, ignoring case and surrounding whitespace.
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag.trim().eq_ignore_ascii_case(self.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f32>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl Meal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags = tags.into_iter().map(str::to_owned).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
    }

    pub fn is_meal_type(&self, meal_type: MealType) -> bool {
        self.tags.iter().any(|t| meal_type.matches_tag(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_meal_type_parses_any_case() {
        assert_eq!(MealType::from_str("Dinner").unwrap(), MealType::Dinner);
        assert_eq!(MealType::from_str("SNACK").unwrap(), MealType::Snack);
        assert!(MealType::from_str("brunch").is_err());
        assert_eq!(MealType::Lunch.to_string(), "lunch");
    }

    #[test]
    fn test_meal_tag_lookup_ignores_case() {
        let meal = Meal::new("1", "Pancakes").with_tags(["Breakfast", " sweet "]);

        assert!(meal.has_tag("breakfast"));
        assert!(meal.has_tag("SWEET"));
        assert!(!meal.has_tag("dinner"));
        assert!(meal.is_meal_type(MealType::Breakfast));
        assert!(!meal.is_meal_type(MealType::Snack));
    }

    #[test]
    fn test_meal_deserializes_without_optional_fields() {
        let meal: Meal = serde_json::from_str(r#"{"id":"m1","name":"Toast"}"#).unwrap();

        assert!(meal.tags.is_empty());
        assert!(meal.ingredients.is_empty());
        assert!(meal.notes.is_empty());
    }
}
