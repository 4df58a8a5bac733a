//! Identity handlers
//!
//! The anonymous identity is minted and stored client-side; this endpoint
//! echoes the value the server resolved from the request so the client can
//! verify what it is being attributed as.

use axum::Json;
use serde::Serialize;

use crate::extractors::ClientId;

/// Echoed identity response
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub client_id: String,
}

/// Echo the caller's anonymous identity
///
/// GET /identity
pub async fn get_client_id(ClientId(identity): ClientId) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        client_id: identity.to_string(),
    })
}
