use crate::domain::FieldMap;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use service_core::error::AppError;
use validator::Validate;

/// Form fields posted as a flat JSON object.
///
/// An empty body counts as `{}`; anything that is not a JSON object is a
/// 400. Content type is not checked, browsers posting from plain forms
/// often omit it.
pub struct FieldBag(pub FieldMap);

#[axum::async_trait]
impl<S> FromRequest<S> for FieldBag
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_fields(&body)
            .map(FieldBag)
            .map_err(IntoResponse::into_response)
    }
}

fn parse_fields(body: &[u8]) -> Result<FieldMap, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FieldMap::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(FieldMap::from_json(object)),
        Ok(_) => Err(AppError::BadRequest(anyhow::anyhow!(
            "Request body must be a JSON object"
        ))),
        Err(e) => Err(AppError::BadRequest(anyhow::anyhow!(
            "Json parse error: {}",
            e
        ))),
    }
}

/// `Query<T>` followed by `validator` checks.
pub struct ValidatedQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid query: {}", e.body_text())))?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}
