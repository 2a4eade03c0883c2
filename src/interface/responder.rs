//! Error → response mapping.
//!
//! Bodyは常にステータスの標準reason phrase。サーバ側の原因はログにのみ残し、呼び出し元には返さない。

use http::StatusCode;

use crate::application::error::AppError;

use super::error_log::ErrorLog;
use super::gateway::GatewayResponse;

pub fn client_error(status: StatusCode) -> GatewayResponse {
    GatewayResponse::new(status, reason_phrase(status))
}

pub fn server_error(log: &impl ErrorLog, cause: &dyn std::error::Error) -> GatewayResponse {
    log.record(&cause.to_string());
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    GatewayResponse::new(status, reason_phrase(status))
}

/// AppErrorを分類してレスポンスに変換する。
pub fn error_response(log: &impl ErrorLog, err: &AppError) -> GatewayResponse {
    if !err.is_client_error() {
        return server_error(log, err);
    }
    match err {
        AppError::NotFound(_) => client_error(StatusCode::NOT_FOUND),
        _ => client_error(StatusCode::BAD_REQUEST),
    }
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}
