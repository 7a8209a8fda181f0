use crate::dtos::{ApiResponse, BarcodeData, DocumentData, QrCodeData};
use crate::startup::AppState;
use crate::utils::FieldBag;
use axum::{extract::State, Json};
use service_core::error::AppError;

pub async fn generate_qr_code(
    State(state): State<AppState>,
    FieldBag(fields): FieldBag,
) -> Result<Json<ApiResponse<QrCodeData>>, AppError> {
    let generated = state.generator.generate_qr(&fields).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to generate QR code");
        AppError::from(e)
    })?;

    Ok(Json(ApiResponse::ok(generated.into())))
}

pub async fn generate_barcode(
    State(state): State<AppState>,
    FieldBag(fields): FieldBag,
) -> Result<Json<ApiResponse<BarcodeData>>, AppError> {
    let generated = state.generator.generate_barcode(&fields).await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to generate barcode");
        AppError::from(e)
    })?;

    Ok(Json(ApiResponse::ok(generated.into())))
}

pub async fn generate_document(
    State(state): State<AppState>,
    FieldBag(fields): FieldBag,
) -> Result<Json<ApiResponse<DocumentData>>, AppError> {
    let document = state.generator.generate_document(&fields).await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to generate document");
        AppError::from(e)
    })?;

    Ok(Json(ApiResponse::ok(document.into())))
}
