/// Ошибки конфигурации и некорректного вызова

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Ошибки уровня "программист/конфигурация": fail fast.
/// Пустые или разреженные данные ошибкой не считаются
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("top_n must be at least 1")]
    InvalidTopN,

    #[error("fallback_hours must not be empty")]
    EmptyFallbackHours,

    #[error("hour {0} is out of range 0..=23")]
    HourOutOfRange(i32),
}

impl IntoResponse for SchedulerError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
