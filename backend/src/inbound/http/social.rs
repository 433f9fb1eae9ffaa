//! Social feed HTTP handlers.
//!
//! ```text
//! GET /api/v1/social?subreddit=<name>
//! GET /api/v1/social/trending
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Envelope, Error, Post};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::non_blank;
use crate::inbound::http::ApiResult;

#[derive(Debug, Deserialize)]
pub struct SocialQuery {
    subreddit: Option<String>,
}

/// Posts from an explicit community, or a rotating pick from the user's
/// followed communities when none is given.
#[utoipa::path(
    get,
    path = "/api/v1/social",
    params(("subreddit" = Option<String>, Query, description = "Community override")),
    responses(
        (status = 200, description = "Community posts", body = Envelope<Post>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["social"],
    operation_id = "getSocialFeed"
)]
#[get("/social")]
pub async fn get_social_feed(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SocialQuery>,
) -> ApiResult<HttpResponse> {
    let user = session.user_id()?;
    let subreddit = non_blank(query.subreddit.as_deref());
    let envelope = state.social.feed(user.as_ref(), subreddit.as_deref()).await;
    Ok(HttpResponse::Ok().json(envelope))
}

/// Hot posts sampled across the standing discussion communities.
#[utoipa::path(
    get,
    path = "/api/v1/social/trending",
    responses(
        (status = 200, description = "Trending posts", body = Envelope<Post>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["social"],
    operation_id = "getTrendingSocial"
)]
#[get("/social/trending")]
pub async fn get_trending_social(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.social.trending().await))
}
