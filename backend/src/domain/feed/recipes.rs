//! Recipe aggregation.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::feed::preferences_for;
use crate::domain::normalize::recipes::{is_meaty, recipe, requests_vegetarian, RecipeContext};
use crate::domain::ports::{PreferenceStore, RecipeSource};
use crate::domain::vocabulary::VocabularyTables;
use crate::domain::{mock, Category, CategoryPreferences, Envelope, Recipe, UserId};

/// At most this many cuisines are browsed per request.
const CUISINE_CAP: usize = 3;
/// At most this many recipes are kept per cuisine.
const PER_CUISINE: usize = 3;
/// Hard ceiling on recipes per response; iteration stops early once hit.
const TOTAL_CAP: usize = 8;
/// Detail lookups attempted per search before giving up on more hits.
const SEARCH_CANDIDATES: usize = 6;

pub struct RecipeFeedService {
    source: Arc<dyn RecipeSource>,
    preferences: Arc<dyn PreferenceStore>,
    vocabulary: Arc<VocabularyTables>,
}

impl RecipeFeedService {
    pub fn new(
        source: Arc<dyn RecipeSource>,
        preferences: Arc<dyn PreferenceStore>,
        vocabulary: Arc<VocabularyTables>,
    ) -> Self {
        Self {
            source,
            preferences,
            vocabulary,
        }
    }

    /// Recipes for the caller: a free-text search when `query` is given,
    /// otherwise a browse across the caller's preferred cuisines.
    ///
    /// Vegetarian preferences always filter out meat dishes, on both the
    /// live and synthetic paths.
    pub async fn personalised(
        &self,
        user: Option<&UserId>,
        query: Option<&str>,
    ) -> Envelope<Recipe> {
        let prefs = preferences_for(self.preferences.as_ref(), user, Category::Food).await;
        let (cuisines, dietary) = match prefs {
            CategoryPreferences::Food { cuisines, dietary } => (cuisines, dietary),
            _ => (vec!["italian".to_owned()], Vec::new()),
        };
        let vegetarian = requests_vegetarian(&dietary);
        let ctx = RecipeContext {
            vegetarian,
            dietary: &dietary,
        };

        match query {
            Some(query) => self.search(query, ctx).await,
            None => self.browse(&cuisines, ctx).await,
        }
    }

    async fn search(&self, query: &str, ctx: RecipeContext<'_>) -> Envelope<Recipe> {
        match self.source.search(query).await {
            Ok(meals) => {
                let mut seen = HashSet::new();
                let items: Vec<Recipe> = meals
                    .into_iter()
                    .take(SEARCH_CANDIDATES)
                    .filter(|meal| !(ctx.vegetarian && is_meaty(meal)))
                    .filter_map(|meal| recipe(meal, ctx))
                    .filter(|recipe| seen.insert(recipe.id.clone()))
                    .collect();
                if items.is_empty() {
                    // A successful search with no matches is advisory, not
                    // a failure, so no synthetic substitution happens.
                    return Envelope::real(Vec::new())
                        .with_query(query)
                        .with_message(format!("no recipes matched \"{query}\""));
                }
                Envelope::real(items).with_query(query)
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "recipe search failed");
                Envelope::mock(mock::recipes(query, ctx.vegetarian), Some(err.to_string()))
                    .with_query(query)
            }
        }
    }

    async fn browse(&self, cuisines: &[String], ctx: RecipeContext<'_>) -> Envelope<Recipe> {
        let areas = self.vocabulary.cuisine_areas(cuisines);
        let mut items: Vec<Recipe> = Vec::new();
        let mut seen = HashSet::new();
        let mut failures = Vec::new();

        'areas: for area in areas.iter().take(CUISINE_CAP) {
            let summaries = match self.source.by_cuisine(area).await {
                Ok(summaries) => summaries,
                Err(err) => {
                    tracing::warn!(area = %area, error = %err, "cuisine listing failed");
                    failures.push(err.to_string());
                    continue;
                }
            };

            let mut kept = 0;
            for summary in summaries {
                if kept == PER_CUISINE {
                    break;
                }
                if items.len() == TOTAL_CAP {
                    break 'areas;
                }
                let Some(id) = summary.id else { continue };
                let meal = match self.source.lookup(&id).await {
                    Ok(Some(meal)) => meal,
                    Ok(None) => continue,
                    Err(err) => {
                        tracing::warn!(id = %id, error = %err, "meal lookup failed");
                        failures.push(err.to_string());
                        continue;
                    }
                };
                // Listings occasionally return meals filed under another
                // area; drop those rather than mislabel the cuisine.
                let area_matches = meal
                    .area
                    .as_deref()
                    .map_or(true, |meal_area| meal_area.eq_ignore_ascii_case(area));
                if !area_matches {
                    continue;
                }
                if ctx.vegetarian && is_meaty(&meal) {
                    continue;
                }
                if let Some(recipe) = recipe(meal, ctx) {
                    if seen.insert(recipe.id.clone()) {
                        items.push(recipe);
                        kept += 1;
                    }
                }
            }
        }

        if items.is_empty() {
            let subject = areas.first().cloned().unwrap_or_else(|| "Dinner".to_owned());
            let error = if failures.is_empty() {
                None
            } else {
                Some(failures.join("; "))
            };
            return Envelope::mock(mock::recipes(&subject, ctx.vegetarian), error);
        }
        Envelope::real(items)
    }
}
