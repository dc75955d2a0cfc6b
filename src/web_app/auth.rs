// web_app/auth.rs - Registration and login submit flows
//
// Each flow makes exactly one request and folds every failure into a
// user-facing string. Nothing here touches the DOM, so the rules can be
// exercised against a stub server.

use crate::web_app::api::ApiClient;
use crate::web_app::model::Credentials;
use crate::web_app::session::Session;

pub const REGISTER_SUCCESS_FALLBACK: &str = "User registered successfully!";
pub const REGISTER_FAILURE_FALLBACK: &str = "Registration failed.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILURE_FALLBACK: &str = "Login failed.";
pub const LOGIN_MISSING_TOKEN: &str = "Login failed. Token not received.";

/// Result of one form submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded { message: String },
    Failed { error: String },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }
}

/// Message/error pair shown under a form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub message: String,
    pub error: Option<String>,
}

impl FormState {
    /// Clear both fields before a new attempt.
    pub fn begin(&mut self) {
        self.message.clear();
        self.error = None;
    }

    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Succeeded { message } => {
                self.message = message.clone();
                self.error = None;
            }
            SubmitOutcome::Failed { error } => {
                self.error = Some(error.clone());
                self.message.clear();
            }
        }
    }
}

/// Register an account.
///
/// Success carries the server's message, or a fallback when it sent none.
pub async fn register(api: &ApiClient, credentials: &Credentials) -> SubmitOutcome {
    if let Err(e) = credentials.validate() {
        return SubmitOutcome::Failed { error: e.to_string() };
    }

    match api.signup(credentials).await {
        Ok(resp) => {
            tracing::info!("Registration accepted");
            SubmitOutcome::Succeeded {
                message: resp
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REGISTER_SUCCESS_FALLBACK.to_string()),
            }
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            SubmitOutcome::Failed {
                error: e.user_message(REGISTER_FAILURE_FALLBACK),
            }
        }
    }
}

/// Log in and persist the returned token.
///
/// A 2xx reply without a token counts as a failure and stores nothing.
pub async fn log_in(api: &ApiClient, session: &Session, credentials: &Credentials) -> SubmitOutcome {
    if let Err(e) = credentials.validate() {
        return SubmitOutcome::Failed { error: e.to_string() };
    }

    match api.login(credentials).await {
        Ok(resp) => match resp.token.filter(|t| !t.is_empty()) {
            Some(token) => {
                session.set_token(&token);
                tracing::info!("Login succeeded, session token stored");
                SubmitOutcome::Succeeded {
                    message: LOGIN_SUCCESS_MESSAGE.to_string(),
                }
            }
            None => {
                tracing::warn!("Login response did not include a token");
                SubmitOutcome::Failed {
                    error: LOGIN_MISSING_TOKEN.to_string(),
                }
            }
        },
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            SubmitOutcome::Failed {
                error: e.user_message(LOGIN_FAILURE_FALLBACK),
            }
        }
    }
}
