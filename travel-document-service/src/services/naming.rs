use super::image::{ImageFormat, ImageKind};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// `{prefix}_{YYYYMMDD_HHMMSS}_{8 hex}.{ext}`.
///
/// The suffix is the first 8 hex digits of a v4 UUID: 2^32 values, enough to
/// make same-second collisions inside one process negligible.
pub fn image_filename(kind: ImageKind, format: ImageFormat, now: DateTime<Local>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}_{}.{}",
        kind.prefix(),
        now.format("%Y%m%d_%H%M%S"),
        &suffix[..8],
        format.extension()
    )
}

/// True for names this service could have produced; guards the store against
/// path traversal.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !name.contains("..")
}
