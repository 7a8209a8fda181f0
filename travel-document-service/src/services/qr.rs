use super::image::{encode_png, EncodeError, EncodedImage, ImageFormat, ImageKind};
use super::naming::image_filename;
use chrono::Local;
use image::Luma;
use qrcode::{types::QrError, EcLevel, QrCode};

/// Fixed rendering parameters; changing any of them changes the output bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrEncoder {
    pub module_px: u32,
    pub quiet_zone: bool,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self {
            module_px: 10,
            quiet_zone: true,
        }
    }
}

impl QrEncoder {
    /// Encode `text` at error correction level L with automatic version
    /// selection, black modules on white.
    pub fn encode(&self, text: &str) -> Result<EncodedImage, EncodeError> {
        let code = QrCode::with_error_correction_level(text, EcLevel::L).map_err(|e| match e {
            QrError::DataTooLong => EncodeError::CapacityExceeded { len: text.len() },
            other => EncodeError::Render(other.to_string()),
        })?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(self.quiet_zone)
            .module_dimensions(self.module_px, self.module_px)
            .dark_color(Luma([0u8]))
            .light_color(Luma([255u8]))
            .build();

        Ok(EncodedImage {
            kind: ImageKind::QrCode,
            format: ImageFormat::Png,
            bytes: encode_png(image)?,
            suggested_filename: image_filename(ImageKind::QrCode, ImageFormat::Png, Local::now()),
        })
    }
}
