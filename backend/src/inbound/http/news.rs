//! News feed HTTP handlers.
//!
//! ```text
//! GET /api/v1/news
//! GET /api/v1/news/trending
//! GET /api/v1/news/search?q=<term>
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Article, Envelope, Error};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_query;
use crate::inbound::http::ApiResult;

#[derive(Debug, Deserialize)]
pub struct NewsSearchQuery {
    q: Option<String>,
}

/// Personalised headlines across the user's followed news categories.
#[utoipa::path(
    get,
    path = "/api/v1/news",
    responses(
        (status = 200, description = "Aggregated headlines", body = Envelope<Article>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["news"],
    operation_id = "getNews"
)]
#[get("/news")]
pub async fn get_news(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = session.user_id()?;
    let envelope = state.news.personalised(user.as_ref()).await;
    Ok(HttpResponse::Ok().json(envelope))
}

/// Trending headlines across the standing editorial categories.
#[utoipa::path(
    get,
    path = "/api/v1/news/trending",
    responses(
        (status = 200, description = "Trending headlines", body = Envelope<Article>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["news"],
    operation_id = "getTrendingNews"
)]
#[get("/news/trending")]
pub async fn get_trending_news(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.news.trending().await))
}

/// Full-text article search.
#[utoipa::path(
    get,
    path = "/api/v1/news/search",
    params(("q" = String, Query, description = "Search term")),
    responses(
        (status = 200, description = "Matching articles", body = Envelope<Article>),
        (status = 400, description = "Missing or blank query", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["news"],
    operation_id = "searchNews"
)]
#[get("/news/search")]
pub async fn search_news(
    state: web::Data<HttpState>,
    query: web::Query<NewsSearchQuery>,
) -> ApiResult<HttpResponse> {
    let term = require_query(query.q.as_deref())?;
    Ok(HttpResponse::Ok().json(state.news.search(&term).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::inbound::http::test_utils::{offline_state, test_session_middleware};

    async fn request(path: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(offline_state()))
                .wrap(test_session_middleware())
                .service(get_news)
                .service(get_trending_news)
                .service(search_news),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = res.status();
        let body = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn personalised_news_degrades_to_mock() {
        let (status, body) = request("/news").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_mock"], true);
        assert_eq!(
            body["count"].as_u64(),
            Some(body["items"].as_array().expect("items").len() as u64)
        );
    }

    #[actix_web::test]
    async fn search_without_query_is_rejected() {
        let (status, body) = request("/news/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn search_echoes_the_query() {
        let (status, body) = request("/news/search?q=rust").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "rust");
    }

    #[actix_web::test]
    async fn trending_answers_even_when_offline() {
        let (status, body) = request("/news/trending").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["items"].as_array().expect("items").is_empty());
    }
}
