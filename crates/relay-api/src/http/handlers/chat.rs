//! POST /api/chat
//!
//! Takes `{message}`, returns `{response}` on success and `{error}` otherwise.
//! The body is extracted as raw JSON so a missing or non-string `message`, or
//! an unparseable body, is reported as a validation error.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::Instrument;

use relay_observe::genai_attrs::{
    GEN_AI_OPERATION_NAME, GEN_AI_PROVIDER_NAME, GEN_AI_REQUEST_MODEL, OPERATION_CHAT, span_name,
};
use relay_types::proxy::ChatReply;

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        AppError::validation(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;

    let proxy = &state.proxy;
    let span = tracing::info_span!(
        "chat",
        otel.name = %span_name(OPERATION_CHAT, proxy.model()),
        gen_ai.operation.name = tracing::field::Empty,
        gen_ai.provider.name = tracing::field::Empty,
        gen_ai.request.model = tracing::field::Empty,
    );
    span.record(GEN_AI_OPERATION_NAME, OPERATION_CHAT);
    span.record(GEN_AI_PROVIDER_NAME, proxy.provider_name().unwrap_or("unconfigured"));
    span.record(GEN_AI_REQUEST_MODEL, proxy.model());

    let response = proxy.handle_chat(&body).instrument(span).await?;
    Ok(Json(ChatReply::new(response)))
}
