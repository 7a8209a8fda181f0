use crate::services::airports::Airport;
use crate::services::WeatherReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct AirportDto {
    pub code: &'static str,
    pub city: &'static str,
    pub coordinates: Coordinates,
}

impl From<&Airport> for AirportDto {
    fn from(airport: &Airport) -> Self {
        Self {
            code: airport.code,
            city: airport.city,
            coordinates: Coordinates {
                lat: airport.lat,
                lon: airport.lon,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    pub success: bool,
    pub airports: Vec<AirportDto>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UnknownAirportResponse {
    pub success: bool,
    pub error: String,
    pub available_airports: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct BulkWeatherQuery {
    /// Comma-separated IATA codes; `DEL,BOM` when absent.
    pub airports: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BulkWeatherEntry {
    Report(WeatherReport),
    Missing { success: bool, error: String },
}
