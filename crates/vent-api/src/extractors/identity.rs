//! Client identity extractor
//!
//! Extracts and validates the pseudonymous identity token from the
//! `x-anon-id` header. The token is opaque and client-generated; it is
//! checked for presence and format only, never authenticated.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use vent_common::AppError;
use vent_core::ClientIdentity;

use crate::response::ApiError;

/// Header carrying the client identity token
pub const IDENTITY_HEADER: &str = "x-anon-id";

/// Client identity extracted from the request headers
#[derive(Debug, Clone)]
pub struct ClientId(pub ClientIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or(AppError::MissingIdentity)?
            .to_str()
            .map_err(|_| AppError::InvalidIdentity("non-ASCII header value".to_string()))?;

        let identity = ClientIdentity::parse(raw).map_err(|e| {
            tracing::warn!(error = %e, "Rejected identity header");
            AppError::InvalidIdentity(e.to_string())
        })?;

        Ok(ClientId(identity))
    }
}
