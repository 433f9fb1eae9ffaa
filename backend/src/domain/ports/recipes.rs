//! Port for the recipe database.

use async_trait::async_trait;

use super::UpstreamFailure;

/// A meal reference returned by cuisine listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealSummary {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One numbered ingredient slot from the provider's flat schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// A full meal record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMeal {
    pub id: Option<String>,
    pub name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub source_url: Option<String>,
    /// Slots in provider order; the provider exposes up to twenty.
    pub ingredients: Vec<IngredientSlot>,
}

/// Browse and look up meals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Meals filed under a cuisine area. Summaries only.
    async fn by_cuisine(&self, area: &str) -> Result<Vec<MealSummary>, UpstreamFailure>;

    /// Full detail for one meal, `None` when the id is unknown.
    async fn lookup(&self, id: &str) -> Result<Option<RawMeal>, UpstreamFailure>;

    /// Full-text search over meal names.
    async fn search(&self, query: &str) -> Result<Vec<RawMeal>, UpstreamFailure>;
}
