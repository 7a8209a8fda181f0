//! Document normalization: a loose bag of form fields in, a canonical text
//! payload out.
//!
//! The document kind is decided once, in [`DocumentRequest::from_fields`];
//! everything downstream works on the typed variant.

mod document;
mod fields;
mod payload;

pub use document::{
    BaggageTag, BoardingPass, DocumentKind, DocumentRequest, ETicket, Passenger, Route,
};
pub use fields::FieldMap;
pub use payload::CanonicalPayload;

/// Select the document kind, fill defaults and render the payload.
///
/// Total over every input: a partial or empty field map still yields a
/// complete payload.
pub fn normalize(fields: &FieldMap) -> CanonicalPayload {
    DocumentRequest::from_fields(fields).canonical_payload()
}
