use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::services::quiz::QuizError;

#[derive(Debug)]
pub enum AppError {
    Input(String),
    NotFound(String),
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::Input(msg) | AppError::NotFound(msg) => msg.as_str(),
            AppError::Internal(msg) => *msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Validation(e) => AppError::Input(e.to_string()),
            QuizError::NotFound(_) => AppError::NotFound(err.to_string()),
            QuizError::Storage(e) => {
                tracing::error!("storage failure: {e:?}");
                AppError::Internal("storage failure")
            }
        }
    }
}

/// Turn a client input error into [`AppError::Input`], logging it at `warn`.
pub trait ResultExt<T> {
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Input(format!("{msg}: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn quiz_errors_map_to_status_codes() {
        let cases = [
            (
                QuizError::Validation(ValidationError::MissingTitle),
                StatusCode::BAD_REQUEST,
            ),
            (QuizError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (
                QuizError::Storage(color_eyre::eyre::eyre!("locked")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            let resp = AppError::from(err).into_response();
            assert_eq!(resp.status(), status);
        }
    }

    #[test]
    fn internal_errors_hide_the_cause() {
        let err = AppError::from(QuizError::Storage(color_eyre::eyre::eyre!(
            "secret path /var/db"
        )));
        assert_eq!(err.message(), "storage failure");
    }

    #[test]
    fn reject_input_keeps_the_cause_for_the_caller() {
        let result: Result<(), &str> = Err("expected value at line 1");
        let err = result.reject_input("invalid JSON body").unwrap_err();
        assert!(matches!(err, AppError::Input(ref m) if m.contains("line 1")));
    }
}
