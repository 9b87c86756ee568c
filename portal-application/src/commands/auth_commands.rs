use tracing::{info, warn};

use crate::{AppError, AppState};
use portal_domain::{CurrentUser, EventId, GatewayError, LoginRequest};

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: CurrentUser,
    pub resume: Option<EventId>,
}

pub async fn complete_login(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let token = match state.auth.login(&request).await {
        Ok(token) => token,
        Err(GatewayError::Unauthenticated) => {
            return Err(AppError::Rejected("Invalid email or password".to_string()))
        }
        Err(err) => return Err(err.into()),
    };

    state.session.write().await.sign_in(token.access_token);
    let user = state.current_user().await?;
    let resume = state.session.write().await.take_intent();
    state.persist_session().await?;

    info!(
        user_id = %user.id,
        role = user.role.as_str(),
        resume = resume.is_some(),
        "signed in"
    );
    Ok(LoginOutcome { user, resume })
}

pub async fn abandon_login(state: &AppState) -> Result<(), AppError> {
    let dropped = {
        let mut session = state.session.write().await;
        let dropped = session.pending_intent();
        session.discard_intent();
        dropped
    };
    if let Some(event_id) = dropped {
        info!(event_id = %event_id, "pending registration discarded");
    }
    state.persist_session().await
}

pub async fn logout(state: &AppState) -> Result<(), AppError> {
    state.session.write().await.sign_out();
    if let Err(err) = state.session_store.clear().await {
        warn!("failed to clear session store: {}", err);
        return Err(AppError::Internal(err));
    }
    info!("signed out");
    Ok(())
}
