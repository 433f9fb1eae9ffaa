//! User preference HTTP handlers.
//!
//! ```text
//! GET /api/v1/preferences
//! GET /api/v1/preferences/{category}
//! PUT /api/v1/preferences/{category}
//! ```
//!
//! These are the only endpoints that require a logged-in session; the feed
//! endpoints serve defaults to anonymous visitors instead.

use std::str::FromStr;

use actix_web::{get, put, web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::PreferenceStoreError;
use crate::domain::{Category, CategoryPreferences, Error, PreferenceDocument};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Every stored category document for the authenticated user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub user_id: String,
    pub preferences: Vec<CategoryPreferences>,
}

fn store_error(err: PreferenceStoreError) -> Error {
    Error::internal(format!("preference store failure: {err}"))
}

fn parse_category(raw: &str) -> Result<Category, Error> {
    Category::from_str(raw).map_err(|_| {
        Error::invalid_request(format!("unknown preference category '{raw}'")).with_details(
            json!({
                "field": "category",
                "value": raw,
            }),
        )
    })
}

/// Fetch every stored preference document for the authenticated user.
#[utoipa::path(
    get,
    path = "/api/v1/preferences",
    responses(
        (status = 200, description = "Stored preferences", body = PreferencesResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["preferences"],
    operation_id = "getPreferences"
)]
#[get("/preferences")]
pub async fn get_preferences(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let documents = state
        .preferences
        .all(&user_id)
        .await
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(PreferencesResponse {
        user_id: user_id.to_string(),
        preferences: documents
            .into_iter()
            .map(|document| document.preferences)
            .collect(),
    }))
}

/// Fetch one category's preferences, falling back to the defaults when the
/// user has never saved that category.
#[utoipa::path(
    get,
    path = "/api/v1/preferences/{category}",
    params(("category" = String, Path, description = "Preference category")),
    responses(
        (status = 200, description = "Category preferences", body = PreferenceDocument),
        (status = 400, description = "Unknown category", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["preferences"],
    operation_id = "getCategoryPreferences"
)]
#[get("/preferences/{category}")]
pub async fn get_category_preferences(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let category = parse_category(&path)?;
    let document = state
        .preferences
        .get(&user_id, category)
        .await
        .map_err(store_error)?
        .unwrap_or_else(|| {
            PreferenceDocument::new(user_id.clone(), CategoryPreferences::default_for(category))
        });
    Ok(HttpResponse::Ok().json(document))
}

/// Insert or replace one category's preferences.
#[utoipa::path(
    put,
    path = "/api/v1/preferences/{category}",
    params(("category" = String, Path, description = "Preference category")),
    request_body = CategoryPreferences,
    responses(
        (status = 200, description = "Stored document", body = PreferenceDocument),
        (status = 400, description = "Unknown category or mismatched payload", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["preferences"],
    operation_id = "putCategoryPreferences"
)]
#[put("/preferences/{category}")]
pub async fn put_category_preferences(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<CategoryPreferences>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let category = parse_category(&path)?;
    let preferences = payload.into_inner();
    if preferences.category() != category {
        return Err(
            Error::invalid_request("payload category does not match the path").with_details(
                json!({
                    "path": category.as_str(),
                    "payload": preferences.category().as_str(),
                }),
            ),
        );
    }

    let document = PreferenceDocument::new(user_id, preferences);
    state
        .preferences
        .put(document.clone())
        .await
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::domain::UserId;
    use crate::inbound::http::test_utils::{offline_state, test_session_middleware};
    use crate::outbound::memory::InMemoryPreferenceStore;

    fn preferences_app() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let mut state = offline_state();
        state.preferences = Arc::new(InMemoryPreferenceStore::new());
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .service(get_preferences)
            .service(get_category_preferences)
            .service(put_category_preferences)
            .route(
                "/login",
                web::post().to(|session: SessionContext| async move {
                    session.persist_user(&UserId::random())?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
    }

    macro_rules! login {
        ($app:expr) => {{
            let res = test::call_service(
                $app,
                test::TestRequest::post().uri("/login").to_request(),
            )
            .await;
            res.response()
                .cookies()
                .find(|cookie| cookie.name() == "session")
                .expect("session cookie")
                .into_owned()
        }};
    }

    #[actix_web::test]
    async fn anonymous_access_is_unauthorised() {
        let app = test::init_service(preferences_app()).await;
        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/preferences").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn unknown_category_is_rejected() {
        let app = test::init_service(preferences_app()).await;
        let cookie = login!(&app);
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/preferences/astrology")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn unsaved_category_answers_with_defaults() {
        let app = test::init_service(preferences_app()).await;
        let cookie = login!(&app);
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/preferences/food")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["category"], "food");
        assert_eq!(body["cuisines"][0], "italian");
    }

    #[actix_web::test]
    async fn put_then_get_round_trips() {
        let app = test::init_service(preferences_app()).await;
        let cookie = login!(&app);

        let put_res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/preferences/news")
                .cookie(cookie.clone())
                .set_json(json!({ "category": "news", "categories": ["science"] }))
                .to_request(),
        )
        .await;
        assert_eq!(put_res.status(), StatusCode::OK);

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/preferences")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(get_res).await;
        assert_eq!(body["preferences"][0]["categories"][0], "science");
    }

    #[actix_web::test]
    async fn mismatched_payload_category_is_rejected() {
        let app = test::init_service(preferences_app()).await;
        let cookie = login!(&app);
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/preferences/food")
                .cookie(cookie)
                .set_json(json!({ "category": "news", "categories": ["science"] }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
