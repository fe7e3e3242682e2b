use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agora_utils::constants::{EXCERPT_ELLIPSIS, POST_EXCERPT_LENGTH};
use agora_utils::errors::AppError;

use crate::comment::Author;
use crate::ranking::VoteState;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(rename = "id")]
    pub community_id: String,
    pub name: String,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "id")]
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub community: Community,
    #[serde(default, rename = "upvotes")]
    pub upvote_count: u32,
    #[serde(default, rename = "downvotes")]
    pub downvote_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(rename = "createdAt")]
    pub create_timestamp: DateTime<Utc>,
    #[serde(default, rename = "image")]
    pub image_url: Option<String>,
}

/// Viewer-local state of a post card.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PostCardState {
    pub vote: VoteState,
    pub is_saved: bool,
}

impl Post {
    /// Decodes a post from its json representation.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the beginning of the content, followed by an ellipsis when the content is longer than
    /// [`POST_EXCERPT_LENGTH`] characters.
    pub fn excerpt(&self) -> String {
        match self.content.char_indices().nth(POST_EXCERPT_LENGTH) {
            Some((byte_index, _)) => format!("{}{EXCERPT_ELLIPSIS}", &self.content[..byte_index]),
            None => self.content.clone(),
        }
    }

    pub fn comment_count_label(&self) -> String {
        format!("{} Comments", self.comment_count)
    }
}

impl PostCardState {
    pub fn mount(post: &Post) -> Self {
        PostCardState {
            vote: VoteState::mount(post.upvote_count, post.downvote_count),
            is_saved: false,
        }
    }

    pub fn toggle_up(&mut self) -> i64 {
        self.vote.toggle_up()
    }

    pub fn toggle_down(&mut self) -> i64 {
        self.vote.toggle_down()
    }

    /// Flips the saved flag and returns its new value.
    pub fn toggle_saved(&mut self) -> bool {
        self.is_saved = !self.is_saved;
        self.is_saved
    }
}
