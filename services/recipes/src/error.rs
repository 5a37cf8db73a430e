use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Recipes service error variants.
#[derive(Debug, thiserror::Error)]
pub enum RecipesServiceError {
    #[error("Username sudah ada")]
    UsernameTaken,
    #[error("Username atau password salah")]
    InvalidCredentials,
    #[error("{0} wajib diisi")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{message}")]
    StoreFailure {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RecipesServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::StoreFailure { .. } => "STORE_FAILURE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UsernameTaken | Self::MissingField(_) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::StoreFailure { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Turn a store error into a `StoreFailure` carrying the endpoint's message.
    /// Client errors pass through unchanged.
    pub fn with_message(self, message: &'static str) -> Self {
        match self {
            Self::Internal(source) => Self::StoreFailure { message, source },
            other => other,
        }
    }

    /// Root cause text of a store error, or the display message otherwise.
    fn detail(&self) -> String {
        match self {
            Self::StoreFailure { source, .. } | Self::Internal(source) => {
                source.root_cause().to_string()
            }
            other => other.to_string(),
        }
    }

    fn log_if_server_error(&self) {
        // 4xx are expected client errors and already recorded by the trace layer.
        match self {
            Self::StoreFailure { message, source } => {
                tracing::error!(error = %format!("{source:#}"), kind = self.kind(), "{message}");
            }
            Self::Internal(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = self.kind(), "internal error");
            }
            _ => {}
        }
    }
}

impl From<JsonRejection> for RecipesServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for RecipesServiceError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for RecipesServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for RecipesServiceError {
    fn into_response(self) -> Response {
        self.log_if_server_error();
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Error for `GET /recipes`, which reports failures as `{"error": <cause>}` instead
/// of the `{kind, message}` shape used everywhere else.
#[derive(Debug)]
pub struct LegacyListError(pub RecipesServiceError);

impl From<RecipesServiceError> for LegacyListError {
    fn from(err: RecipesServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for LegacyListError {
    fn into_response(self) -> Response {
        self.0.log_if_server_error();
        let body = serde_json::json!({ "error": self.0.detail() });
        (self.0.status(), axum::Json(body)).into_response()
    }
}
