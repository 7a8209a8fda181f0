use crate::domain::DocumentKind;
use crate::services::{GeneratedDocument, GeneratedImage};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeData {
    pub qr_image_url: String,
    pub filename: String,
    pub qr_data: String,
    pub document_type: DocumentKind,
}

impl From<GeneratedImage> for QrCodeData {
    fn from(generated: GeneratedImage) -> Self {
        Self {
            qr_image_url: generated.image.content_ref,
            filename: generated.image.filename,
            qr_data: generated.payload.qr_text,
            document_type: generated.payload.document_kind,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeData {
    pub barcode_image_url: String,
    pub filename: String,
    pub barcode_data: String,
    pub document_type: DocumentKind,
}

impl From<GeneratedImage> for BarcodeData {
    fn from(generated: GeneratedImage) -> Self {
        Self {
            barcode_image_url: generated.image.content_ref,
            filename: generated.image.filename,
            barcode_data: generated.payload.barcode_text,
            document_type: generated.payload.document_kind,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    pub document_type: DocumentKind,
    pub qr_image_url: String,
    pub qr_filename: String,
    pub qr_text: String,
    pub barcode_image_url: String,
    pub barcode_filename: String,
    pub barcode_text: String,
}

impl From<GeneratedDocument> for DocumentData {
    fn from(document: GeneratedDocument) -> Self {
        Self {
            document_type: document.payload.document_kind,
            qr_image_url: document.qr.content_ref,
            qr_filename: document.qr.filename,
            qr_text: document.payload.qr_text,
            barcode_image_url: document.barcode.content_ref,
            barcode_filename: document.barcode.filename,
            barcode_text: document.payload.barcode_text,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct QrQuery {
    #[validate(length(min = 1, max = 2048, message = "data must be 1 to 2048 characters"))]
    pub data: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BarcodeQuery {
    #[validate(length(min = 1, max = 256, message = "data must be 1 to 256 characters"))]
    pub data: String,
}
