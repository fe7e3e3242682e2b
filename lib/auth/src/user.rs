use serde::{Deserialize, Serialize};

/// Account of a logged-in viewer, as returned by the authentication service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "id")]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "avatar")]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "joinDate")]
    pub join_timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl User {
    /// Name shown in the interface, falls back to the username when no display name was set.
    pub fn shown_name(&self) -> &str {
        match self.display_name.is_empty() {
            true => &self.username,
            false => &self.display_name,
        }
    }
}
