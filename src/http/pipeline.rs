//! The two-stage request pipeline.
//!
//! Every call runs through an explicit pre-send transform and a
//! post-receive normalization, composed around the transport call in
//! `PokedexHttp::get`. There are no mutable hook registries; ordering
//! is fixed by the call site.

use crate::error::ApiError;
use reqwest::RequestBuilder;
use serde_json::Value;

/// Fallback message when an error response body carries no usable text.
pub const SERVER_ERROR_FALLBACK: &str = "请求失败";

/// Fixed message for transport failures where no response was received.
pub const UNREACHABLE_MESSAGE: &str = "网络连接失败，请检查后端服务是否运行";

/// Fallback when a client-side error carries no message of its own.
pub const UNKNOWN_ERROR_FALLBACK: &str = "未知错误";

/// Pre-send stage. Currently the identity transform; reserved for
/// future auth header injection.
pub(crate) fn prepare(req: RequestBuilder) -> RequestBuilder {
    req
}

/// Post-receive stage: collapse the transport outcome into either the
/// decoded body or exactly one [`ApiError`].
///
/// Classification, in priority order:
/// 1. response received with an error status → message extracted from
///    the body (`detail`, then `message`, then the fallback literal),
/// 2. request sent but no response (connect failure, timeout) → fixed
///    unreachable message,
/// 3. anything else (builder error, body decode error) → the underlying
///    error's message, or the unknown-error literal.
pub(crate) async fn normalize(
    outcome: Result<reqwest::Response, reqwest::Error>,
    url: &str,
) -> Result<Value, ApiError> {
    match outcome {
        Ok(resp) => {
            let status = resp.status();
            if status.is_success() {
                return match resp.json::<Value>().await {
                    Ok(body) => Ok(body),
                    Err(e) => {
                        tracing::error!(%url, error = %e, "failed to decode response body");
                        Err(classify_transport_error(&e))
                    }
                };
            }

            let body = resp.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            tracing::error!(
                %url,
                status = status.as_u16(),
                %message,
                "server rejected request"
            );
            Err(ApiError::new(message))
        }
        Err(e) => {
            let err = classify_transport_error(&e);
            tracing::error!(%url, error = %e, "request failed");
            Err(err)
        }
    }
}

/// Extract a human-readable message from an error response body,
/// preferring `detail` over `message`.
pub(crate) fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["detail", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string())
}

fn classify_transport_error(e: &reqwest::Error) -> ApiError {
    if !e.is_builder() && (e.is_connect() || e.is_timeout() || e.is_request()) {
        return ApiError::new(UNREACHABLE_MESSAGE);
    }
    let message = e.to_string();
    if message.is_empty() {
        ApiError::new(UNKNOWN_ERROR_FALLBACK)
    } else {
        ApiError::new(message)
    }
}
