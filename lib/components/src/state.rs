use leptos::prelude::*;

use agora_auth::session::Session;
use agora_auth::user::User;
use agora_core::comment::Author;
use agora_core::tree::TreeConfig;
use agora_utils::errors::AppError;

/// State shared by every component of the page, provided as context.
#[derive(Copy, Clone)]
pub struct GlobalState {
    pub session: RwSignal<Session>,
    /// Identity of the logged-in viewer, `None` for anonymous viewers.
    pub viewer: Signal<Option<Author>>,
    pub tree_config: StoredValue<TreeConfig>,
}

impl GlobalState {
    pub fn new(session: Session, tree_config: TreeConfig) -> Self {
        let session = RwSignal::new(session);
        GlobalState {
            session,
            viewer: Signal::derive(move || session.with(Author::from_session)),
            tree_config: StoredValue::new(tree_config),
        }
    }

    pub fn login(&self, user: User, token: impl Into<String>) {
        let token = token.into();
        self.session.update(|session| session.login(user, token));
    }

    pub fn logout(&self) {
        self.session.update(Session::logout);
    }
}

/// Builds the session of the viewer from the json of their account, anonymous when there is none.
pub fn load_session(user_json: Option<&str>, token: Option<String>) -> Result<Session, AppError> {
    match (user_json, token) {
        (Some(user_json), Some(token)) => {
            let user: User = serde_json::from_str(user_json)?;
            Ok(Session::with_user(user, token))
        },
        (Some(_), None) => {
            log::warn!("Got viewer account without token, continue as anonymous viewer.");
            Ok(Session::new())
        },
        (None, _) => Ok(Session::new()),
    }
}
