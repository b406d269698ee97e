use axum::http::StatusCode;

/// Message shown when the backend fails without saying why.
pub const SERVER_FALLBACK_MESSAGE: &str = "Ошибка сервера";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Everything that can stop a form submission from rendering a result.
///
/// All variants end up in the same inline error block; the split only
/// matters for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),

    #[error("не удалось связаться с сервером прогнозов: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("некорректный ответ сервера: {0}")]
    Schema(String),
}

impl FormError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PREDICT_BACKEND_URL {value:?}: {reason}")]
    BackendUrl { value: String, reason: String },
}
