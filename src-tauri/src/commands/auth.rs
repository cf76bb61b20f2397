//! Login command
use scribe_core::LoginOutcome;
use serde::Serialize;
use tauri::State;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Granted { token } => Self {
                success: true,
                token: Some(token),
                error: None,
            },
            LoginOutcome::Denied { error } => Self {
                success: false,
                token: None,
                error: Some(error),
            },
        }
    }
}

#[tauri::command]
pub fn login(state: State<AppState>, username: String, password: String) -> LoginResponse {
    match state.with_workbench(|workbench| Ok(workbench.authenticator().login(&username, &password)))
    {
        Ok(outcome) => outcome.into(),
        Err(e) => LoginResponse {
            success: false,
            token: None,
            error: Some(e.to_string()),
        },
    }
}
