use anyhow::anyhow;
use portal_domain::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, AppError::Unauthenticated)
    }

    /// Text shown to the user. Backend rejections pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthenticated => "Please sign in first".to_string(),
            AppError::Forbidden(message) => message.clone(),
            AppError::BadRequest(message) => message.clone(),
            AppError::Rejected(message) => message.clone(),
            AppError::Transport(_) => "Request failed, please try again".to_string(),
            AppError::Internal(err) => format!("Unexpected error: {err}"),
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(value: GatewayError) -> Self {
        match value {
            GatewayError::Unauthenticated => AppError::Unauthenticated,
            GatewayError::Forbidden(message) => AppError::Forbidden(message),
            GatewayError::NotFound(message) => AppError::Rejected(message),
            GatewayError::Rejected { message, .. } => AppError::Rejected(message),
            GatewayError::Transport(message) => AppError::Transport(message),
            GatewayError::Decode(message) => AppError::Internal(anyhow!(message)),
        }
    }
}
