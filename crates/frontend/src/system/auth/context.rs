use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub email: Option<String>,
}

/// Текущая сессия администратора.
///
/// Единственное место, где токен пишется в storage и читается из него.
/// REST-клиент получает `Session` явно и только читает токен.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Restores the session from local storage (empty if no token stored)
    pub fn restore() -> Self {
        let token = storage::get_token();
        let email = token.as_ref().and_then(|_| storage::get_email());
        if token.is_some() {
            log::debug!("session restored from storage");
        }
        Self {
            state: RwSignal::new(SessionState { token, email }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.token.is_some())
    }

    /// Токен для заголовка Authorization, без подписки на изменения
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    pub fn email(&self) -> Option<String> {
        self.state.with(|s| s.email.clone())
    }

    pub fn sign_in(&self, token: String, email: String) {
        storage::save_token(&token);
        storage::save_email(&email);
        self.state.set(SessionState {
            token: Some(token),
            email: Some(email),
        });
        log::info!("signed in");
    }

    /// Сбрасывает сессию; шелл сразу показывает страницу входа.
    pub fn sign_out(&self) {
        storage::clear_session();
        if self.state.with_untracked(|s| s.token.is_some()) {
            self.state.set(SessionState::default());
            log::info!("signed out");
        }
    }
}

pub fn provide_session() {
    provide_context(Session::restore());
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

/// Helper: Perform login and open the session
pub async fn do_login(session: Session, email: String, password: String) -> Result<(), String> {
    let token = api::login(email.clone(), password)
        .await
        .map_err(|e| e.to_string())?;
    session.sign_in(token, email);
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(session: Session) {
    session.sign_out();
}
