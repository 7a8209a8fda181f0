pub mod airports;
pub mod barcode;
pub mod code128;
pub mod generator;
pub mod image;
pub mod metrics;
pub mod naming;
pub mod qr;
pub mod storage;
pub mod weather;

pub use barcode::BarcodeEncoder;
pub use generator::{DocumentGenerator, GenerateError, GeneratedDocument, GeneratedImage};
pub use image::{EncodeError, EncodedImage, ImageFormat, ImageKind};
pub use metrics::{get_metrics, init_metrics};
pub use qr::QrEncoder;
pub use storage::{ImagePublisher, ImageStore, LocalImageStore, PublishedImage, StorageError};
pub use weather::{WeatherError, WeatherReport, WeatherService};
