//! Session Store
//!
//! Owns the authentication lifecycle: token persistence, restoration on
//! mount, the Google credential exchange and the demo login. Constructed
//! explicitly in `App` and handed down through context; lifecycle is
//! construct -> restore -> ready, with `logout` as the explicit teardown.

use leptos::prelude::*;

use crate::api;
use crate::error::{AppError, AppResult};
use crate::mapper::to_view_user;
use crate::models::User;
use crate::token;

/// Session state shared through context. Holds at most one authenticated
/// identity; a late login simply replaces an earlier one.
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            // Unknown until `restore` has run once
            loading: RwSignal::new(true),
        }
    }

    pub fn user(&self) -> RwSignal<Option<User>> {
        self.user
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn token(&self) -> Option<String> {
        token::load()
    }

    /// Resolve the persisted token into a session. No token means anonymous;
    /// the demo sentinel restores the demo identity without network I/O; a
    /// real token is verified against `/auth/me`. An invalid token is an
    /// expected steady state, so verification failure demotes silently.
    pub async fn restore(&self) {
        match token::load() {
            None => self.user.set(None),
            Some(tok) if token::is_demo(&tok) => self.user.set(Some(demo_user())),
            Some(_) => {
                let result = api::auth::me()
                    .await
                    .map(to_view_user)
                    .map_err(|e| AppError::Session(e.message().to_string()));
                self.apply_verification(result);
            }
        }
        self.loading.set(false);
    }

    fn apply_verification(&self, result: AppResult<User>) {
        match result {
            Ok(user) => self.user.set(Some(user)),
            Err(err) => {
                crate::log::info(&format!("[SESSION] token verification failed: {}", err));
                token::clear();
                self.user.set(None);
            }
        }
    }

    /// Exchange the provider credential for a backend token. Any failure
    /// clears partial state and leaves the session anonymous; the error
    /// bubbles up for the login view to display.
    pub async fn login_with_google(&self, credential: &str) -> AppResult<()> {
        match api::auth::google_login(credential).await {
            Ok(response) => {
                token::store(&response.access_token);
                self.user.set(Some(to_view_user(response.user)));
                Ok(())
            }
            Err(err) => {
                token::clear();
                self.user.set(None);
                Err(err)
            }
        }
    }

    /// Fabricated session for evaluation without a backend. The delay mimics
    /// the real exchange's latency.
    pub async fn login_demo(&self) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(800).await;
        token::store(token::DEMO_TOKEN);
        self.user.set(Some(demo_user()));
    }

    pub fn logout(&self) {
        token::clear();
        self.user.set(None);
    }
}

/// Get the session from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// Fixed identity used by demo sessions
pub fn demo_user() -> User {
    User {
        id: "demo".to_string(),
        email: "demo@checklist.app".to_string(),
        name: Some("Usuário Demo".to_string()),
    }
}
