use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::IntoResponse,
};

/// Route prefixes that serve generated assets to other origins.
#[derive(Clone, Debug, Default)]
pub struct AssetPaths(pub Vec<String>);

impl AssetPaths {
    fn matches(&self, path: &str) -> bool {
        self.0.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

pub async fn security_headers_middleware(
    State(assets): State<AssetPaths>,
    req: Request,
    next: Next,
) -> impl IntoResponse {
    let is_asset_route = assets.matches(req.uri().path());

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        header::HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    if is_asset_route {
        // Images are embedded by front-ends hosted elsewhere.
        headers.insert(
            "cross-origin-resource-policy",
            header::HeaderValue::from_static("cross-origin"),
        );
        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_static("public, max-age=86400, immutable"),
        );
    } else {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        );
        headers.insert(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("DENY"),
        );
    }

    response
}
