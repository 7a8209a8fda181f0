//! The generation pipeline: normalize fields, encode, publish.

use super::barcode::BarcodeEncoder;
use super::image::{EncodeError, EncodedImage, ImageKind};
use super::metrics::{record_document_generated, record_encode_failure};
use super::qr::QrEncoder;
use super::storage::{ImagePublisher, PublishedImage, StorageError};
use crate::domain::{normalize, CanonicalPayload, FieldMap};
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<EncodeError> for AppError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::Render(_) => AppError::InternalError(anyhow::Error::new(err)),
            _ => AppError::Unprocessable(anyhow::Error::new(err)),
        }
    }
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Encode(e) => e.into(),
            GenerateError::Storage(e @ StorageError::Io(_)) => {
                AppError::StorageError(anyhow::Error::new(e))
            }
            GenerateError::Storage(e) => AppError::InternalError(anyhow::Error::new(e)),
        }
    }
}

/// One published image and the payload it was rendered from.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub payload: CanonicalPayload,
    pub image: PublishedImage,
}

#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub payload: CanonicalPayload,
    pub qr: PublishedImage,
    pub barcode: PublishedImage,
}

#[derive(Clone)]
pub struct DocumentGenerator {
    qr: QrEncoder,
    barcode: BarcodeEncoder,
    publisher: ImagePublisher,
}

impl DocumentGenerator {
    pub fn new(publisher: ImagePublisher) -> Self {
        Self {
            qr: QrEncoder::default(),
            barcode: BarcodeEncoder::default(),
            publisher,
        }
    }

    pub async fn generate_qr(&self, fields: &FieldMap) -> Result<GeneratedImage, GenerateError> {
        let payload = normalize(fields);
        let encoded = self.encode_qr_text(&payload.qr_text)?;
        let image = self.publish(&payload, &encoded).await?;

        Ok(GeneratedImage { payload, image })
    }

    pub async fn generate_barcode(
        &self,
        fields: &FieldMap,
    ) -> Result<GeneratedImage, GenerateError> {
        let payload = normalize(fields);
        let encoded = self.encode_barcode_text(&payload.barcode_text)?;
        let image = self.publish(&payload, &encoded).await?;

        Ok(GeneratedImage { payload, image })
    }

    /// Both images for one document. Both are encoded before anything is
    /// published, so a barcode encode failure leaves no orphaned QR file
    /// behind. A storage failure on the barcode still leaves the QR file.
    pub async fn generate_document(
        &self,
        fields: &FieldMap,
    ) -> Result<GeneratedDocument, GenerateError> {
        let payload = normalize(fields);
        let qr = self.encode_qr_text(&payload.qr_text)?;
        let barcode = self.encode_barcode_text(&payload.barcode_text)?;

        let qr = self.publish(&payload, &qr).await?;
        let barcode = self.publish(&payload, &barcode).await?;

        Ok(GeneratedDocument {
            payload,
            qr,
            barcode,
        })
    }

    /// Raw QR encoding, nothing stored.
    pub fn encode_qr_text(&self, text: &str) -> Result<EncodedImage, EncodeError> {
        self.qr
            .encode(text)
            .inspect_err(|_| record_encode_failure(ImageKind::QrCode))
    }

    /// Raw Code128 encoding, nothing stored.
    pub fn encode_barcode_text(&self, text: &str) -> Result<EncodedImage, EncodeError> {
        self.barcode
            .encode(text)
            .inspect_err(|_| record_encode_failure(ImageKind::Barcode))
    }

    async fn publish(
        &self,
        payload: &CanonicalPayload,
        encoded: &EncodedImage,
    ) -> Result<PublishedImage, GenerateError> {
        let published = self.publisher.publish(encoded).await?;
        record_document_generated(payload.document_kind, encoded.kind);
        tracing::info!(
            kind = %payload.document_kind,
            image = encoded.kind.prefix(),
            filename = %published.filename,
            bytes = encoded.bytes.len(),
            "Generated document image"
        );
        Ok(published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocumentKind;
    use crate::services::storage::LocalImageStore;
    use std::sync::Arc;
    use uuid::Uuid;

    fn inline() -> DocumentGenerator {
        DocumentGenerator::new(ImagePublisher::Inline)
    }

    #[tokio::test]
    async fn empty_fields_give_default_boarding_pass() {
        let generated = inline().generate_qr(&FieldMap::new()).await.unwrap();

        assert_eq!(generated.payload.document_kind, DocumentKind::BoardingPass);
        assert!(generated.image.filename.starts_with("qr_code_"));
        assert!(generated.image.content_ref.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn barcode_uses_kind_specific_text() {
        let fields: FieldMap = [("bagNumber", "0042-000001")].into_iter().collect();
        let generated = inline().generate_barcode(&fields).await.unwrap();

        assert_eq!(generated.payload.document_kind, DocumentKind::BaggageTag);
        assert_eq!(generated.payload.barcode_text, "0042-000001");
        assert!(generated.image.filename.starts_with("barcode_"));
    }

    #[tokio::test]
    async fn unsupported_barcode_text_is_an_encode_error() {
        let fields: FieldMap = [("pnr", "ÅBC123")].into_iter().collect();
        let err = inline().generate_barcode(&fields).await.unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Encode(EncodeError::UnsupportedCharacters { position: 0, .. })
        ));
    }

    #[tokio::test]
    async fn document_failure_stores_nothing() {
        let dir = std::env::temp_dir().join(format!("travel-doc-gen-{}", Uuid::new_v4()));
        let store = Arc::new(LocalImageStore::new(&dir).await.unwrap());
        let generator = DocumentGenerator::new(ImagePublisher::File {
            store,
            public_path: "/static/images".to_string(),
        });

        let fields: FieldMap = [("pnr", "PNR\u{2013}1")].into_iter().collect();
        assert!(generator.generate_document(&fields).await.is_err());

        let mut entries = tokio::fs::read_dir(&dir).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());

        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[tokio::test]
    async fn document_publishes_both_images_to_files() {
        let dir = std::env::temp_dir().join(format!("travel-doc-gen-{}", Uuid::new_v4()));
        let store = Arc::new(LocalImageStore::new(&dir).await.unwrap());
        let generator = DocumentGenerator::new(ImagePublisher::File {
            store,
            public_path: "/static/images".to_string(),
        });

        let document = generator.generate_document(&FieldMap::new()).await.unwrap();

        assert!(document.qr.content_ref.starts_with("/static/images/qr_code_"));
        assert!(document.barcode.content_ref.starts_with("/static/images/barcode_"));
        assert!(dir.join(&document.qr.filename).is_file());
        assert!(dir.join(&document.barcode.filename).is_file());

        let _ = tokio::fs::remove_dir_all(dir).await;
    }

    #[test]
    fn encode_errors_map_to_http_statuses() {
        use axum::http::StatusCode;

        let unsupported = AppError::from(EncodeError::UnsupportedCharacters {
            character: '\u{e9}',
            position: 0,
        });
        assert_eq!(unsupported.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let render = AppError::from(GenerateError::Encode(EncodeError::Render("x".into())));
        assert_eq!(render.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn raw_encoders_are_deterministic() {
        let generator = inline();
        let a = generator.encode_barcode_text("ABC123").unwrap();
        let b = generator.encode_barcode_text("ABC123").unwrap();

        assert_eq!(a.bytes, b.bytes);
    }
}
