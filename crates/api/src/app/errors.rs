use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use ecom_core::ServiceFault;

use crate::app::routes::Operation;

/// Map a fault from a write operation (add, update quantity, generate
/// description) to `400` with the fault message as a plain-text body.
///
/// Every fault kind takes this path, including `Unavailable`.
pub fn fault_to_response(operation: Operation, fault: ServiceFault) -> axum::response::Response {
    tracing::error!(
        operation = operation.name(),
        kind = fault.kind(),
        "{} failed: {}",
        operation.name(),
        fault.message()
    );
    (StatusCode::BAD_REQUEST, fault.to_string()).into_response()
}

/// Map a fault from a read operation (list, get by id) to a generic `500`.
/// The fault message is logged, never returned.
pub fn read_fault_to_response(operation: Operation, fault: ServiceFault) -> axum::response::Response {
    tracing::error!(
        operation = operation.name(),
        kind = fault.kind(),
        "{} failed: {}",
        operation.name(),
        fault.message()
    );
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
