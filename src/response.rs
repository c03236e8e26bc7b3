//! Response helpers. Reads return bare JSON; confirmations are plain text.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub fn json_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(status: StatusCode, text: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}

pub fn message_ok(text: String) -> Response {
    message(StatusCode::OK, text)
}

pub fn message_created(text: String) -> Response {
    message(StatusCode::CREATED, text)
}
