use super::DocumentKind;
use serde::Serialize;

/// Deterministic text rendering of one document.
///
/// `qr_text` never embeds the current time, so the same field set always
/// renders to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPayload {
    pub document_kind: DocumentKind,
    pub qr_text: String,
    pub barcode_text: String,
}

/// Header line followed by `Label: value` lines, newline-joined.
pub(crate) fn render_lines(header: &str, lines: &[(&str, &str)]) -> String {
    let mut text = String::from(header);
    for (label, value) in lines {
        text.push('\n');
        text.push_str(label);
        text.push_str(": ");
        text.push_str(value);
    }
    text
}
