//! Weather HTTP handler.
//!
//! ```text
//! GET /api/v1/weather?city=<name>
//! ```

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Error, WeatherReport};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::non_blank;
use crate::inbound::http::ApiResult;

const DEFAULT_CITY: &str = "London";

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    city: Option<String>,
}

/// Current conditions plus a five-day forecast for one city.
#[utoipa::path(
    get,
    path = "/api/v1/weather",
    params(("city" = Option<String>, Query, description = "City name, defaults to London")),
    responses(
        (status = 200, description = "Weather report", body = WeatherReport),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["weather"],
    operation_id = "getWeather"
)]
#[get("/weather")]
pub async fn get_weather(
    state: web::Data<HttpState>,
    query: web::Query<WeatherQuery>,
) -> ApiResult<HttpResponse> {
    let city = non_blank(query.city.as_deref()).unwrap_or_else(|| DEFAULT_CITY.to_owned());
    Ok(HttpResponse::Ok().json(state.weather.report(&city).await))
}
