//! Recipe feed HTTP handler.
//!
//! ```text
//! GET /api/v1/recipes?query=<term>
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Envelope, Error, Recipe};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::non_blank;
use crate::inbound::http::ApiResult;

#[derive(Debug, Deserialize)]
pub struct RecipeQuery {
    query: Option<String>,
}

/// Recipes for the user's cuisines, or matching a free-text search.
///
/// Vegetarian and vegan diners never receive meat dishes, in either mode.
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    params(("query" = Option<String>, Query, description = "Free-text dish search")),
    responses(
        (status = 200, description = "Recipe suggestions", body = Envelope<Recipe>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "getRecipes"
)]
#[get("/recipes")]
pub async fn get_recipes(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<RecipeQuery>,
) -> ApiResult<HttpResponse> {
    let user = session.user_id()?;
    let term = non_blank(query.query.as_deref());
    let envelope = state
        .recipes
        .personalised(user.as_ref(), term.as_deref())
        .await;
    Ok(HttpResponse::Ok().json(envelope))
}
