use crate::dtos::{
    AirportDto, AirportsResponse, BulkWeatherEntry, BulkWeatherQuery, UnknownAirportResponse,
};
use crate::services::airports::{airport_codes, AIRPORTS};
use crate::services::WeatherError;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;

const DEFAULT_BULK_AIRPORTS: &str = "DEL,BOM";

pub async fn list_airports() -> Json<AirportsResponse> {
    let airports: Vec<AirportDto> = AIRPORTS.iter().map(AirportDto::from).collect();

    Json(AirportsResponse {
        success: true,
        count: airports.len(),
        airports,
    })
}

pub async fn airport_weather(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match state.weather.report(&code) {
        Ok(report) => Json(report).into_response(),
        Err(e @ WeatherError::UnknownAirport(_)) => {
            tracing::debug!(code = %code, "Weather requested for unknown airport");
            (
                StatusCode::NOT_FOUND,
                Json(UnknownAirportResponse {
                    success: false,
                    error: e.to_string(),
                    available_airports: airport_codes(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn bulk_weather(
    State(state): State<AppState>,
    Query(query): Query<BulkWeatherQuery>,
) -> Json<BTreeMap<String, BulkWeatherEntry>> {
    let requested = query.airports.as_deref().unwrap_or(DEFAULT_BULK_AIRPORTS);

    let results = requested
        .split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .map(|code| {
            let entry = match state.weather.report(&code) {
                Ok(report) => BulkWeatherEntry::Report(report),
                Err(_) => BulkWeatherEntry::Missing {
                    success: false,
                    error: format!("Airport {} not found", code),
                },
            };
            (code, entry)
        })
        .collect();

    Json(results)
}
