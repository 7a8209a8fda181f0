pub mod generate;
pub mod weather;

pub use generate::{BarcodeData, BarcodeQuery, DocumentData, QrCodeData, QrQuery};
pub use weather::{
    AirportDto, AirportsResponse, BulkWeatherEntry, BulkWeatherQuery, Coordinates,
    UnknownAirportResponse,
};

use serde::Serialize;

/// Success half of the `{success, data?, error?}` envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
