//! Curated deals HTTP handler.
//!
//! ```text
//! GET /api/v1/deals
//! ```
//!
//! Deals come from an editorial list rather than a live provider, so the
//! envelope is always a success and every item carries `is_static: true`.

use actix_web::{get, HttpResponse};

use crate::domain::{mock, Deal, Envelope, Error};
use crate::inbound::http::ApiResult;

/// Current curated shopping deals.
#[utoipa::path(
    get,
    path = "/api/v1/deals",
    responses(
        (status = 200, description = "Curated deals", body = Envelope<Deal>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["deals"],
    operation_id = "getDeals"
)]
#[get("/deals")]
pub async fn get_deals() -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(Envelope::real(mock::deals())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn serves_the_curated_list() {
        let app = test::init_service(App::new().service(get_deals)).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/deals").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["is_mock"], false);
        let items = body["items"].as_array().expect("items");
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item["is_static"] == true));
    }
}
