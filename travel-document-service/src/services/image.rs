//! Encoded image value type and the errors encoders can return.

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    QrCode,
    Barcode,
}

impl ImageKind {
    /// Filename prefix for stored images.
    pub fn prefix(&self) -> &'static str {
        match self {
            ImageKind::QrCode => "qr_code",
            ImageKind::Barcode => "barcode",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unsupported character {character:?} at position {position}; Code128 accepts printable ASCII only")]
    UnsupportedCharacters { character: char, position: usize },

    #[error("barcode text is empty")]
    Empty,

    #[error("text of {len} bytes does not fit in a single QR symbol")]
    CapacityExceeded { len: usize },

    #[error("failed to render PNG: {0}")]
    Render(String),
}

/// A rendered image plus the name it should be stored under.
///
/// The filename carries a timestamp and a random suffix; the pixel content
/// depends only on the encoded text.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub kind: ImageKind,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
    pub suggested_filename: String,
}

impl EncodedImage {
    /// Inline locator: `data:image/png;base64,...`.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

pub(crate) fn encode_png(image: GrayImage) -> Result<Vec<u8>, EncodeError> {
    let dynamic_image = DynamicImage::ImageLuma8(image);
    let mut buffer = Cursor::new(Vec::new());
    dynamic_image
        .write_to(&mut buffer, image::ImageOutputFormat::Png)
        .map_err(|e| EncodeError::Render(e.to_string()))?;

    Ok(buffer.into_inner())
}
