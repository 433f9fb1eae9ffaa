//! Recipe normalisation and the derived preparation fields.
//!
//! The recipe provider returns no nutrition or timing data, so both are
//! estimated from the ingredient list and instruction length. The
//! estimates are deliberately simple and deterministic; tests pin the
//! exact formulas.

use crate::domain::content::{Nutrition, Recipe};
use crate::domain::ports::RawMeal;
use crate::domain::vocabulary::title_case;

/// At most this many ingredients are reported per recipe.
pub const MAX_INGREDIENTS: usize = 12;

const PROTEIN_KEYWORDS: [&str; 8] = [
    "egg", "meat", "fish", "bean", "lentil", "chicken", "tofu", "cheese",
];
const CARB_KEYWORDS: [&str; 6] = ["flour", "rice", "pasta", "bread", "potato", "oat"];
const FAT_KEYWORDS: [&str; 6] = ["oil", "butter", "cream", "cheese", "nut", "avocado"];
const MEAT_KEYWORDS: [&str; 10] = [
    "chicken", "beef", "pork", "lamb", "fish", "seafood", "meat", "turkey", "duck", "bacon",
];

/// Dietary preference context for one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeContext<'a> {
    /// The caller asked for vegetarian results.
    pub vegetarian: bool,
    /// The caller's stored dietary preferences, tagged onto each recipe.
    pub dietary: &'a [String],
}

/// Whether a stored dietary preference list asks for vegetarian results.
pub fn requests_vegetarian(dietary: &[String]) -> bool {
    dietary.iter().any(|entry| {
        let entry = entry.to_lowercase();
        entry.contains("vegetarian") || entry.contains("vegan") || entry.contains("plant-based")
    })
}

/// Whether a meal's name or category names a meat.
pub fn is_meaty(meal: &RawMeal) -> bool {
    let name = meal.name.as_deref().unwrap_or_default().to_lowercase();
    let category = meal.category.as_deref().unwrap_or_default().to_lowercase();
    MEAT_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword) || category.contains(keyword))
}

/// Convert one full meal record into a canonical recipe.
///
/// Returns `None` only when the record has no id; every other missing
/// field takes a documented default.
pub fn recipe(meal: RawMeal, ctx: RecipeContext<'_>) -> Option<Recipe> {
    let id = meal.id.clone().filter(|id| !id.trim().is_empty())?;
    let ingredients = ingredient_lines(&meal);
    let nutrition = estimate_nutrition(&ingredients);
    let instructions = meal
        .instructions
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "Instructions not available for this recipe.".to_owned());

    Some(Recipe {
        id,
        title: meal
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_owned()),
        image: meal.thumbnail_url.unwrap_or_default(),
        ready_in_minutes: estimate_minutes(&instructions),
        servings: 4,
        cuisine: vec![meal
            .area
            .filter(|area| !area.trim().is_empty())
            .unwrap_or_else(|| "International".to_owned())],
        dietary: dietary_tags(meal.category.as_deref(), ctx),
        ingredients: ingredients.into_iter().take(MAX_INGREDIENTS).collect(),
        instructions,
        source_url: meal.source_url.unwrap_or_default(),
        nutrition,
        is_static: false,
    })
}

/// Render the provider's numbered slots as "measure ingredient" lines.
/// Slots with a blank ingredient name are skipped.
fn ingredient_lines(meal: &RawMeal) -> Vec<String> {
    meal.ingredients
        .iter()
        .filter_map(|slot| {
            let name = slot.name.as_deref()?.trim();
            if name.is_empty() {
                return None;
            }
            let measure = slot.measure.as_deref().unwrap_or_default().trim();
            if measure.is_empty() {
                Some(name.to_owned())
            } else {
                Some(format!("{measure} {name}"))
            }
        })
        .collect()
}

/// Keyword-count heuristic over the full (untruncated) ingredient list.
fn estimate_nutrition(ingredients: &[String]) -> Nutrition {
    let count_matches = |keywords: &[&str]| {
        ingredients
            .iter()
            .filter(|line| {
                let line = line.to_lowercase();
                keywords.iter().any(|keyword| line.contains(keyword))
            })
            .count() as u32
    };
    let protein = count_matches(&PROTEIN_KEYWORDS);
    let carbs = count_matches(&CARB_KEYWORDS);
    let fat = count_matches(&FAT_KEYWORDS);

    Nutrition {
        calories: 300 + 15 * ingredients.len() as u32,
        protein: format!("{}g", 15 + 8 * protein),
        carbs: format!("{}g", 30 + 12 * carbs),
        fat: format!("{}g", 10 + 4 * fat),
    }
}

/// Rough preparation time from instruction length; 30 minutes when the
/// instructions are absent.
fn estimate_minutes(instructions: &str) -> u32 {
    if instructions.trim().is_empty() {
        return 30;
    }
    let length = instructions.len();
    if length > 1000 {
        60
    } else if length > 500 {
        45
    } else if length < 200 {
        20
    } else {
        30
    }
}

fn dietary_tags(category: Option<&str>, ctx: RecipeContext<'_>) -> Vec<String> {
    let category = category.unwrap_or_default();
    let mut tags = Vec::new();
    if ctx.vegetarian || category.to_lowercase().contains("vegetarian") {
        tags.push("Vegetarian".to_owned());
    }
    if !category.trim().is_empty() && !category.eq_ignore_ascii_case("miscellaneous") {
        let label = title_case(category);
        if !tags.iter().any(|tag| tag.eq_ignore_ascii_case(&label)) {
            tags.push(label);
        }
    }
    for preference in ctx.dietary {
        let label = title_case(preference);
        if !tags.iter().any(|tag| tag.eq_ignore_ascii_case(&label)) {
            tags.push(label);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::IngredientSlot;

    fn slot(name: &str, measure: &str) -> IngredientSlot {
        IngredientSlot {
            name: Some(name.to_owned()),
            measure: Some(measure.to_owned()),
        }
    }

    fn meal(ingredients: Vec<IngredientSlot>) -> RawMeal {
        RawMeal {
            id: Some("52772".to_owned()),
            name: Some("Teriyaki Chicken".to_owned()),
            ingredients,
            ..RawMeal::default()
        }
    }

    #[rstest]
    fn nutrition_example_matches_the_pinned_formula() {
        let out = recipe(
            meal(vec![
                slot("rice", "2 cups"),
                slot("egg", "1"),
                slot("butter", "1 tbsp"),
            ]),
            RecipeContext::default(),
        )
        .expect("recipe");
        assert_eq!(out.nutrition.calories, 345);
        assert_eq!(out.nutrition.protein, "23g");
        assert_eq!(out.nutrition.carbs, "42g");
        assert_eq!(out.nutrition.fat, "14g");
    }

    #[rstest]
    fn nutrition_counts_every_ingredient_even_past_the_display_cap() {
        let slots: Vec<_> = (0..15).map(|i| slot(&format!("item {i}"), "1")).collect();
        let out = recipe(meal(slots), RecipeContext::default()).expect("recipe");
        assert_eq!(out.ingredients.len(), MAX_INGREDIENTS);
        assert_eq!(out.nutrition.calories, 300 + 15 * 15);
    }

    #[rstest]
    fn blank_slots_are_skipped_and_measures_are_optional() {
        let out = recipe(
            meal(vec![
                slot("  ", "2 cups"),
                slot("salt", "   "),
                slot("flour", "200g"),
            ]),
            RecipeContext::default(),
        )
        .expect("recipe");
        assert_eq!(out.ingredients, ["salt", "200g flour"]);
    }

    #[rstest]
    #[case(1200, 60)]
    #[case(700, 45)]
    #[case(300, 30)]
    #[case(50, 20)]
    fn preparation_time_follows_instruction_length(#[case] length: usize, #[case] expected: u32) {
        let mut raw = meal(vec![]);
        raw.instructions = Some("x".repeat(length));
        let out = recipe(raw, RecipeContext::default()).expect("recipe");
        assert_eq!(out.ready_in_minutes, expected);
    }

    #[rstest]
    fn missing_instructions_default_the_text_and_the_time() {
        let out = recipe(meal(vec![]), RecipeContext::default()).expect("recipe");
        assert_eq!(out.instructions, "Instructions not available for this recipe.");
        assert_eq!(out.ready_in_minutes, 30);
        assert_eq!(out.servings, 4);
        assert_eq!(out.cuisine, ["International"]);
    }

    #[rstest]
    fn dietary_tags_combine_request_category_and_preferences() {
        let dietary = vec!["gluten-free".to_owned(), "vegetarian".to_owned()];
        let mut raw = meal(vec![]);
        raw.category = Some("Dessert".to_owned());
        let out = recipe(
            raw,
            RecipeContext {
                vegetarian: true,
                dietary: &dietary,
            },
        )
        .expect("recipe");
        assert_eq!(out.dietary, ["Vegetarian", "Dessert", "Gluten-free"]);
    }

    #[rstest]
    fn miscellaneous_category_is_not_tagged() {
        let mut raw = meal(vec![]);
        raw.category = Some("Miscellaneous".to_owned());
        let out = recipe(raw, RecipeContext::default()).expect("recipe");
        assert!(out.dietary.is_empty());
    }

    #[rstest]
    #[case(&["vegan"], true)]
    #[case(&["Vegetarian"], true)]
    #[case(&["plant-based"], true)]
    #[case(&["gluten-free"], false)]
    #[case(&[], false)]
    fn vegetarian_request_detection(#[case] dietary: &[&str], #[case] expected: bool) {
        let dietary: Vec<String> = dietary.iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(requests_vegetarian(&dietary), expected);
    }

    #[rstest]
    fn beef_category_counts_as_meaty() {
        let mut raw = meal(vec![]);
        raw.name = Some("Stew".to_owned());
        raw.category = Some("Beef".to_owned());
        assert!(is_meaty(&raw));

        raw.category = Some("Vegetarian".to_owned());
        assert!(!is_meaty(&raw));
    }
}
