//! Signed interaction extractor
//!
//! Verifies the ed25519 signature Discord attaches to every interaction
//! request, then parses the body. The signature covers the raw bytes, so the
//! body is buffered before it is deserialized.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRef, FromRequest, Request},
    http::HeaderMap,
};
use hrbot_discord::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use hrbot_discord::Interaction;

use crate::response::ApiError;
use crate::state::AppState;

/// Interaction whose signature has been checked against the application key
#[derive(Debug, Clone)]
pub struct VerifiedInteraction(pub Interaction);

#[async_trait]
impl<S> FromRequest<S> for VerifiedInteraction
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let (signature, timestamp) = signature_headers(req.headers())?;

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_payload(e.body_text()))?;

        app_state.verifier().verify(&signature, &timestamp, &body)?;

        let interaction = serde_json::from_slice::<Interaction>(&body)
            .map_err(|e| ApiError::invalid_payload(e.to_string()))?;

        Ok(VerifiedInteraction(interaction))
    }
}

fn signature_headers(headers: &HeaderMap) -> Result<(String, String), ApiError> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or(ApiError::MissingSignature)
    };

    Ok((header(SIGNATURE_HEADER)?, header(TIMESTAMP_HEADER)?))
}
