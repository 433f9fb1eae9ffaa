//! Video feed HTTP handler.
//!
//! ```text
//! GET /api/v1/videos
//! ```

use actix_web::{get, web, HttpResponse};

use crate::domain::{Envelope, Error, Video};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Recent videos for one of the user's followed topics.
///
/// The topic, search phrasing, and result ordering rotate between calls so
/// repeated visits surface different uploads.
#[utoipa::path(
    get,
    path = "/api/v1/videos",
    responses(
        (status = 200, description = "Video feed", body = Envelope<Video>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["videos"],
    operation_id = "getVideos"
)]
#[get("/videos")]
pub async fn get_videos(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = session.user_id()?;
    Ok(HttpResponse::Ok().json(state.videos.personalised(user.as_ref()).await))
}
