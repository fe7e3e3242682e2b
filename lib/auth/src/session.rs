//! Session of the current viewer.
//!
//! The session is an explicit value owned by whoever builds the interface: logging in populates it,
//! logging out clears it. Nothing reads it from ambient storage.

use agora_utils::errors::AppError;

use crate::user::User;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    /// Creates an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already populated with `user` and `token`.
    pub fn with_user(user: User, token: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.login(user, token);
        session
    }

    pub fn login(&mut self, user: User, token: impl Into<String>) {
        log::debug!("Login user {}", user.user_id);
        self.user = Some(user);
        self.token = Some(token.into());
    }

    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            log::debug!("Logout user {}", user.user_id);
        }
        self.user = None;
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Returns the user when the session is authenticated.
    pub fn user(&self) -> Option<&User> {
        match self.is_authenticated() {
            true => self.user.as_ref(),
            false => None,
        }
    }

    /// Returns the user or [`AppError::NotAuthenticated`].
    pub fn check_user(&self) -> Result<&User, AppError> {
        self.user().ok_or(AppError::NotAuthenticated)
    }
}
