use super::code128;
use super::image::{encode_png, EncodeError, EncodedImage, ImageFormat, ImageKind};
use super::naming::image_filename;
use chrono::Local;
use image::{GrayImage, Luma};

/// Linear barcode renderer. Bars only, no human-readable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeEncoder {
    pub module_px: u32,
    pub bar_height_px: u32,
    pub quiet_zone_modules: u32,
}

impl Default for BarcodeEncoder {
    fn default() -> Self {
        Self {
            module_px: 2,
            bar_height_px: 100,
            quiet_zone_modules: 10,
        }
    }
}

impl BarcodeEncoder {
    pub fn encode(&self, text: &str) -> Result<EncodedImage, EncodeError> {
        let modules = code128::encode(text)?;

        Ok(EncodedImage {
            kind: ImageKind::Barcode,
            format: ImageFormat::Png,
            bytes: encode_png(self.render(&modules))?,
            suggested_filename: image_filename(ImageKind::Barcode, ImageFormat::Png, Local::now()),
        })
    }

    fn render(&self, modules: &[bool]) -> GrayImage {
        let total_modules = modules.len() as u32 + 2 * self.quiet_zone_modules;
        let width = total_modules * self.module_px;

        GrayImage::from_fn(width, self.bar_height_px, |x, _| {
            let module = (x / self.module_px).checked_sub(self.quiet_zone_modules);
            match module.and_then(|m| modules.get(m as usize)) {
                Some(true) => Luma([0u8]),
                _ => Luma([255u8]),
            }
        })
    }
}
