use platewise_shared::Meal;

use crate::SuggestionContext;

#[derive(Debug)]
pub struct FilteredCatalog<'a> {
    /// Meals passing the tag and search predicates, before week exclusion
    pub matched: usize,
    pub candidates: Vec<&'a Meal>,
}

/// Narrows the catalog to the meals a request may suggest.
///
/// # Business Rules
/// - **Tags**: OR logic, a meal needs one of the selected tags; no selection keeps all
/// - **Search**: case-insensitive substring of the meal name; a blank query keeps all
/// - **Exclusion**: meals already scheduled in the active week are always dropped
pub struct SuggestionFilter;

impl SuggestionFilter {
    pub fn apply<'a>(catalog: &'a [Meal], context: &SuggestionContext) -> FilteredCatalog<'a> {
        let query = context.search_query.trim().to_lowercase();

        let matching = catalog
            .iter()
            .filter(|meal| Self::matches_tags(meal, context))
            .filter(|meal| query.is_empty() || meal.name.to_lowercase().contains(&query))
            .collect::<Vec<_>>();

        let matched = matching.len();
        let candidates = matching
            .into_iter()
            .filter(|meal| !context.existing_plan_ids.contains(&meal.id))
            .collect();

        FilteredCatalog {
            matched,
            candidates,
        }
    }

    fn matches_tags(meal: &Meal, context: &SuggestionContext) -> bool {
        context.selected_tags.is_empty()
            || context.selected_tags.iter().any(|tag| meal.has_tag(tag))
    }
}
