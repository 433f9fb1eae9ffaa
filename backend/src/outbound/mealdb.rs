//! Reqwest-backed recipe source adapter for TheMealDB.
//!
//! TheMealDB reports ingredients as twenty numbered string columns
//! (`strIngredient1`..`strIngredient20` with matching `strMeasure`
//! columns); the DTO collects them into ordered slots.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use super::{get_json, AdapterBuildError};
use crate::domain::ports::{
    IngredientSlot, MealSummary, RawMeal, RecipeSource, UpstreamFailure,
};

const DEFAULT_BASE: &str = "https://www.themealdb.com/api/json/v1/1/";
const INGREDIENT_SLOTS: usize = 20;

pub struct MealDbRecipeSource {
    client: Client,
    base: Url,
}

impl MealDbRecipeSource {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed or the
    /// base URL is invalid.
    pub fn new(timeout: Duration) -> Result<Self, AdapterBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: Url::parse(DEFAULT_BASE)?,
        })
    }

    fn endpoint(&self, path: &str, key: &str, value: &str) -> Result<Url, UpstreamFailure> {
        let mut url = self
            .base
            .join(path)
            .map_err(|error| UpstreamFailure::transport(error.to_string()))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }
}

#[async_trait]
impl RecipeSource for MealDbRecipeSource {
    async fn by_cuisine(&self, area: &str) -> Result<Vec<MealSummary>, UpstreamFailure> {
        let url = self.endpoint("filter.php", "a", area)?;
        let response: FilterResponseDto = get_json(&self.client, url).await?;
        Ok(response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|meal| MealSummary {
                id: meal.id_meal,
                name: meal.str_meal,
            })
            .collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RawMeal>, UpstreamFailure> {
        let url = self.endpoint("lookup.php", "i", id)?;
        let response: DetailResponseDto = get_json(&self.client, url).await?;
        Ok(response
            .meals
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(MealDto::into_raw))
    }

    async fn search(&self, query: &str) -> Result<Vec<RawMeal>, UpstreamFailure> {
        let url = self.endpoint("search.php", "s", query)?;
        let response: DetailResponseDto = get_json(&self.client, url).await?;
        Ok(response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(MealDto::into_raw)
            .collect())
    }
}

/// `meals` is `null`, not `[]`, when nothing matches.
#[derive(Debug, Deserialize)]
struct FilterResponseDto {
    meals: Option<Vec<SummaryDto>>,
}

#[derive(Debug, Deserialize)]
struct SummaryDto {
    #[serde(rename = "idMeal")]
    id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    str_meal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailResponseDto {
    meals: Option<Vec<MealDto>>,
}

#[derive(Debug, Deserialize)]
struct MealDto {
    #[serde(rename = "idMeal")]
    id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    str_meal: Option<String>,
    #[serde(rename = "strMealThumb")]
    str_meal_thumb: Option<String>,
    #[serde(rename = "strCategory")]
    str_category: Option<String>,
    #[serde(rename = "strArea")]
    str_area: Option<String>,
    #[serde(rename = "strInstructions")]
    str_instructions: Option<String>,
    #[serde(rename = "strSource")]
    str_source: Option<String>,
    /// Catch-all for the numbered ingredient and measure columns.
    #[serde(flatten)]
    columns: BTreeMap<String, Value>,
}

impl MealDto {
    fn column(&self, prefix: &str, index: usize) -> Option<String> {
        match self.columns.get(&format!("{prefix}{index}")) {
            Some(Value::String(text)) => Some(text.clone()),
            _ => None,
        }
    }

    fn into_raw(self) -> RawMeal {
        let ingredients = (1..=INGREDIENT_SLOTS)
            .map(|index| IngredientSlot {
                name: self.column("strIngredient", index),
                measure: self.column("strMeasure", index),
            })
            .collect();
        RawMeal {
            id: self.id_meal,
            name: self.str_meal,
            thumbnail_url: self.str_meal_thumb,
            category: self.str_category,
            area: self.str_area,
            instructions: self.str_instructions,
            source_url: self.str_source,
            ingredients,
        }
    }
}
