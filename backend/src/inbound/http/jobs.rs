//! Job listing HTTP handlers.
//!
//! ```text
//! GET /api/v1/jobs
//! GET /api/v1/jobs/trending
//! GET /api/v1/jobs/search?q=<term>
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Envelope, Error, JobListing};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_query;
use crate::inbound::http::ApiResult;

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    q: Option<String>,
}

/// Listings for the user's first followed hiring category.
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "Job listings", body = Envelope<JobListing>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "getJobs"
)]
#[get("/jobs")]
pub async fn get_jobs(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = session.user_id()?;
    Ok(HttpResponse::Ok().json(state.jobs.personalised(user.as_ref()).await))
}

/// Listings sampled across a fixed set of hiring categories.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/trending",
    responses(
        (status = 200, description = "Trending listings", body = Envelope<JobListing>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "getTrendingJobs"
)]
#[get("/jobs/trending")]
pub async fn get_trending_jobs(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.jobs.trending().await))
}

/// Free-text listing search.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/search",
    params(("q" = String, Query, description = "Search term")),
    responses(
        (status = 200, description = "Matching listings", body = Envelope<JobListing>),
        (status = 400, description = "Missing or blank query", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["jobs"],
    operation_id = "searchJobs"
)]
#[get("/jobs/search")]
pub async fn search_jobs(
    state: web::Data<HttpState>,
    query: web::Query<JobSearchQuery>,
) -> ApiResult<HttpResponse> {
    let term = require_query(query.q.as_deref())?;
    Ok(HttpResponse::Ok().json(state.jobs.search(&term).await))
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
                .service(get_jobs)
                .service(get_trending_jobs)
                .service(search_jobs),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(path).to_request()).await;
        let status = res.status();
        let body = test::read_body_json(res).await;
        (status, body)
    }

    #[actix_web::test]
    async fn personalised_jobs_degrade_to_mock() {
        let (status, body) = request("/jobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_mock"], true);
        assert_eq!(body["category"], "technology");
    }

    #[actix_web::test]
    async fn search_without_query_is_rejected() {
        let (status, body) = request("/jobs/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn trending_answers_even_when_offline() {
        let (status, body) = request("/jobs/trending").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["items"].as_array().expect("items").is_empty());
    }
}
