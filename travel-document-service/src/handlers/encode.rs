//! Direct text-to-PNG endpoints. Nothing is stored.

use crate::dtos::{BarcodeQuery, QrQuery};
use crate::services::EncodedImage;
use crate::startup::AppState;
use crate::utils::ValidatedQuery;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

fn png_response(image: EncodedImage) -> Response {
    (
        [(header::CONTENT_TYPE, image.format.mime_type())],
        image.bytes,
    )
        .into_response()
}

pub async fn qr_image(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<QrQuery>,
) -> Result<Response, AppError> {
    let image = state.generator.encode_qr_text(&query.data).map_err(|e| {
        tracing::warn!(error = %e, len = query.data.len(), "QR encoding failed");
        AppError::from(e)
    })?;
    Ok(png_response(image))
}

pub async fn barcode_image(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BarcodeQuery>,
) -> Result<Response, AppError> {
    let image = state.generator.encode_barcode_text(&query.data).map_err(|e| {
        tracing::warn!(error = %e, "Barcode encoding failed");
        AppError::from(e)
    })?;
    Ok(png_response(image))
}
