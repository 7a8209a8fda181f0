pub mod validation;

pub use validation::{FieldBag, ValidatedQuery};
