pub mod encode;
pub mod generate;
pub mod health;
pub mod metrics;
pub mod weather;

pub use encode::{barcode_image, qr_image};
pub use generate::{generate_barcode, generate_document, generate_qr_code};
pub use health::{api_health, health_check};
pub use metrics::metrics_endpoint;
pub use weather::{airport_weather, bulk_weather, list_airports};
