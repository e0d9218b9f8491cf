//! Request extractors
//!
//! Body and path extractors whose rejections render through [`AppError`]
//! as validation errors (400).

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Message for a path id that is not an integer
pub const ERR_PARSING_ID: &str = "cannot parse ID, should be integer";

/// Shape validation of a deserialized request body
pub trait Validate {
    /// Collect every field violation as `"field: reason"`
    fn validate(&self) -> Result<(), Vec<String>>;
}

/// JSON body that must deserialize and pass [`Validate`]
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            AppError::Validation(format!(
                "invalid request, please verify: {}",
                rejection.body_text()
            ))
        })?;

        value
            .validate()
            .map_err(|violations| AppError::Validation(violations.join("\n")))?;

        Ok(Self(value))
    }
}

/// Integer primary key taken from the `:id` path segment
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation(ERR_PARSING_ID.to_string()))?;

        raw.parse()
            .map(Self)
            .map_err(|_| AppError::Validation(ERR_PARSING_ID.to_string()))
    }
}
