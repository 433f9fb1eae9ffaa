//! Cryptocurrency market HTTP handler.
//!
//! ```text
//! GET /api/v1/market
//! ```

use actix_web::{get, web, HttpResponse};

use crate::domain::{CoinQuote, Envelope, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Top coins by market capitalisation.
#[utoipa::path(
    get,
    path = "/api/v1/market",
    responses(
        (status = 200, description = "Market quotes", body = Envelope<CoinQuote>),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["market"],
    operation_id = "getMarket"
)]
#[get("/market")]
pub async fn get_market(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.market.top().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::inbound::http::test_utils::offline_state;

    #[actix_web::test]
    async fn answers_with_mock_quotes_when_offline() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(offline_state()))
                .service(get_market),
        )
        .await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/market").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["is_mock"], true);
        assert_eq!(body["items"][0]["symbol"], "BTC");
    }
}
