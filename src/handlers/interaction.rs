use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    commands,
    constants::{SIGNATURE_HEADER, TIMESTAMP_HEADER},
    models::{Data, InteractionKind, InteractionResponse},
    signature::is_valid_signature,
    utils::messages::build_internal_error,
};

/// Handle one signed interaction callback
///
/// Verification always runs on the raw bytes before the body is parsed.
pub async fn handle_interaction(
    State(data): State<Data>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    let (Some(signature), Some(timestamp)) = (
        header_value(&headers, SIGNATURE_HEADER),
        header_value(&headers, TIMESTAMP_HEADER),
    ) else {
        return (StatusCode::UNAUTHORIZED, "Missing signature headers").into_response();
    };

    if !is_valid_signature(data.public_key.as_deref(), signature, timestamp, &body) {
        return (StatusCode::UNAUTHORIZED, "Invalid request signature").into_response();
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejecting interaction with malformed JSON: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid JSON body").into_response();
        }
    };

    match InteractionKind::of(&payload) {
        InteractionKind::Ping => reply(StatusCode::OK, InteractionResponse::pong()),
        InteractionKind::ApplicationCommand => {
            match commands::execute(payload, data.store.as_ref()).await {
                Ok(content) => reply(StatusCode::OK, InteractionResponse::ephemeral(content)),
                Err(e) => {
                    error!("Interaction handling failed: {}", e);
                    reply(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        InteractionResponse::ephemeral(build_internal_error()),
                    )
                }
            }
        }
        InteractionKind::Unsupported => {
            (StatusCode::BAD_REQUEST, "Unsupported interaction type").into_response()
        }
    }
}

/// Non-empty UTF-8 header value
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

fn reply(status: StatusCode, response: InteractionResponse) -> Response {
    (status, Json(response)).into_response()
}
