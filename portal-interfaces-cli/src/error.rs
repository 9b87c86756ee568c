use portal_application::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Failed(String),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Failed(_) => 1,
            CliError::Usage(_) => 2,
            CliError::Unauthenticated(_) => 3,
            CliError::Forbidden(_) => 4,
        }
    }
}

impl From<AppError> for CliError {
    fn from(value: AppError) -> Self {
        let message = value.user_message();
        match value {
            AppError::Unauthenticated => CliError::Unauthenticated(format!(
                "{message}. Run `portal login` and try again."
            )),
            AppError::Forbidden(_) => CliError::Forbidden(message),
            AppError::BadRequest(_) => CliError::Usage(message),
            AppError::Rejected(_) | AppError::Transport(_) | AppError::Internal(_) => {
                CliError::Failed(message)
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        CliError::Failed(format!("terminal error: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_errors_map_to_exit_codes() {
        assert_eq!(CliError::from(AppError::Unauthenticated).exit_code(), 3);
        assert_eq!(
            CliError::from(AppError::Forbidden("staff only".into())).exit_code(),
            4
        );
        assert_eq!(
            CliError::from(AppError::BadRequest("proxy entry 1 needs a name".into())).exit_code(),
            2
        );
        let rejected = CliError::from(AppError::Rejected("Event is full".into()));
        assert_eq!(rejected.exit_code(), 1);
        assert_eq!(rejected.to_string(), "Event is full");
    }

    #[test]
    fn transport_failures_hide_details() {
        let err = CliError::from(AppError::Transport("connection refused".into()));
        assert_eq!(err.to_string(), "Request failed, please try again");
    }
}
