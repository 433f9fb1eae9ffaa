//! Movie feed HTTP handler.
//!
//! ```text
//! GET /api/v1/movies
//! ```

use actix_web::{get, web, HttpResponse};

use crate::domain::{Envelope, Error, MovieSummary};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Popular movies matching the user's preferred genres.
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    responses(
        (status = 200, description = "Movie suggestions", body = Envelope<MovieSummary>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["movies"],
    operation_id = "getMovies"
)]
#[get("/movies")]
pub async fn get_movies(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = session.user_id()?;
    Ok(HttpResponse::Ok().json(state.movies.personalised(user.as_ref()).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::inbound::http::test_utils::{offline_state, test_session_middleware};

    #[actix_web::test]
    async fn answers_with_mock_movies_when_offline() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(offline_state()))
                .wrap(test_session_middleware())
                .service(get_movies),
        )
        .await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/movies").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["is_mock"], true);
        assert_eq!(body["category"], "Action");
    }
}
