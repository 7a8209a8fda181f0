#![allow(dead_code)]

use service_core::config::Config as CoreConfig;
use travel_document_service::config::{
    ImageDelivery, LimitsConfig, StorageConfig, TravelDocConfig, WeatherConfig,
};
use travel_document_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub images_dir: String,
    pub client: reqwest::Client,
}

pub fn test_config(delivery: ImageDelivery) -> TravelDocConfig {
    TravelDocConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        storage: StorageConfig {
            images_dir: format!("target/test-images-{}", Uuid::new_v4()),
            public_path: "/static/images".to_string(),
            delivery,
        },
        limits: LimitsConfig {
            rate_limit_per_minute: 600,
            request_timeout_secs: 10,
            max_body_bytes: 65536,
        },
        weather: WeatherConfig { cache_ttl_secs: 300 },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config(ImageDelivery::File)).await
    }

    pub async fn spawn_with(config: TravelDocConfig) -> Self {
        let images_dir = config.storage.images_dir.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            images_dir,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.images_dir).await;
    }
}

/// Decode the single QR symbol in a PNG.
pub fn decode_qr(png: &[u8]) -> String {
    let gray = image::load_from_memory(png)
        .expect("valid PNG")
        .to_luma8();
    let (width, height) = gray.dimensions();

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| gray.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "exactly one symbol expected");

    let (_meta, content) = grids[0].decode().expect("symbol should decode");
    content
}
