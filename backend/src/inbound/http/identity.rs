//! Session identity HTTP handlers.
//!
//! ```text
//! POST   /api/v1/session
//! GET    /api/v1/session
//! DELETE /api/v1/session
//! ```
//!
//! There is no password flow; callers either bring their stable id or get a
//! freshly minted one, and the session cookie carries it from then on.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::ApiResult;

/// Request payload for opening a session.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenSessionRequest {
    /// Existing user id to resume; omit to mint a new identity.
    pub user_id: Option<String>,
}

/// The identity bound to the session cookie.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub user_id: String,
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| {
        Error::invalid_request("userId must be a UUID").with_details(json!({
            "field": "userId",
            "value": raw,
            "reason": err.to_string(),
        }))
    })
}

/// Open a session, resuming the supplied user id or minting a new one.
#[utoipa::path(
    post,
    path = "/api/v1/session",
    request_body = OpenSessionRequest,
    responses(
        (status = 200, description = "Session opened", body = IdentityResponse),
        (status = 400, description = "Malformed user id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "openSession"
)]
#[post("/session")]
pub async fn open_session(
    session: SessionContext,
    payload: web::Json<OpenSessionRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = match payload.into_inner().user_id {
        Some(raw) => parse_user_id(&raw)?,
        None => UserId::random(),
    };
    session.persist_user(&user_id)?;
    Ok(HttpResponse::Ok().json(IdentityResponse {
        user_id: user_id.to_string(),
    }))
}

/// The identity bound to the current session.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Session identity", body = IdentityResponse),
        (status = 401, description = "No session", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "getSession"
)]
#[get("/session")]
pub async fn get_session(session: SessionContext) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    Ok(HttpResponse::Ok().json(IdentityResponse {
        user_id: user_id.to_string(),
    }))
}

/// Discard the session and its identity.
#[utoipa::path(
    delete,
    path = "/api/v1/session",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "closeSession"
)]
#[delete("/session")]
pub async fn close_session(session: SessionContext) -> ApiResult<HttpResponse> {
    session.clear();
    Ok(HttpResponse::NoContent().finish())
}
