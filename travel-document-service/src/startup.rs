use crate::config::{ImageDelivery, TravelDocConfig};
use crate::handlers;
use crate::services::{
    DocumentGenerator, ImagePublisher, ImageStore, LocalImageStore, WeatherService,
};
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use dashmap::DashMap;
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    rate_limit::{create_ip_rate_limiter, ip_rate_limit_middleware},
    security_headers::{security_headers_middleware, AssetPaths},
    tracing::request_id_middleware,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub config: TravelDocConfig,
    pub generator: DocumentGenerator,
    pub weather: WeatherService,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: TravelDocConfig) -> Result<Self, AppError> {
        let public_path = config.storage.public_path.trim_end_matches('/').to_string();

        let publisher = match config.storage.delivery {
            ImageDelivery::File => {
                let store: Arc<dyn ImageStore> = Arc::new(
                    LocalImageStore::new(&config.storage.images_dir)
                        .await
                        .map_err(|e| {
                            tracing::error!(
                                "Failed to initialize image directory at {}: {}",
                                config.storage.images_dir,
                                e
                            );
                            AppError::StorageError(anyhow::Error::new(e))
                        })?,
                );
                ImagePublisher::File {
                    store,
                    public_path: public_path.clone(),
                }
            }
            ImageDelivery::Inline => ImagePublisher::Inline,
        };

        let state = AppState {
            config: config.clone(),
            generator: DocumentGenerator::new(publisher),
            weather: WeatherService::new(Arc::new(DashMap::new()), config.weather.cache_ttl()),
        };

        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            delivery = ?config.storage.delivery,
            images_dir = %config.storage.images_dir,
            "Listening"
        );

        let server = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let public_path = config.storage.public_path.trim_end_matches('/').to_string();

    let asset_paths = AssetPaths(vec![
        public_path.clone(),
        "/api/qr".to_string(),
        "/api/barcode".to_string(),
    ]);
    let limiter = create_ip_rate_limiter(config.limits.rate_limit_per_minute, 60);

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api/health", get(handlers::api_health))
        .route("/api/generate/qr-code", post(handlers::generate_qr_code))
        .route("/api/generate/barcode", post(handlers::generate_barcode))
        .route("/api/generate/document", post(handlers::generate_document))
        .route("/api/qr", get(handlers::qr_image))
        .route("/api/barcode", get(handlers::barcode_image))
        .route("/api/airports", get(handlers::list_airports))
        .route("/api/weather/bulk", get(handlers::bulk_weather))
        .route("/api/weather/:code", get(handlers::airport_weather));

    if config.storage.delivery == ImageDelivery::File {
        router = router.nest_service(&public_path, ServeDir::new(&config.storage.images_dir));
    }

    router
        .layer(from_fn_with_state(limiter, ip_rate_limit_middleware))
        .layer(from_fn_with_state(asset_paths, security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(TimeoutLayer::new(config.limits.request_timeout()))
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
