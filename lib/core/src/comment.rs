use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agora_auth::session::Session;
use agora_auth::user::User;
use agora_utils::constants::LOCAL_COMMENT_ID_PREFIX;
use agora_utils::errors::AppError;

/// Snapshot of the author of a post or comment.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
    #[serde(default, rename = "avatar")]
    pub avatar_url: String,
}

/// A comment or reply, with its replies in submission order.
///
/// The server tallies are the baseline used to compute the displayed score; the viewer's own vote is kept
/// outside of the node (see [`crate::tree::CommentTree`]). Content, author and timestamp never change after
/// construction, only replies can be appended.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    #[serde(rename = "id")]
    comment_id: String,
    content: String,
    author: Author,
    #[serde(rename = "createdAt")]
    create_timestamp: DateTime<Utc>,
    #[serde(default, rename = "upvotes")]
    upvote_count: u32,
    #[serde(default, rename = "downvotes")]
    downvote_count: u32,
    #[serde(default, rename = "replies")]
    child_comments: Vec<CommentNode>,
}

/// Generates ids for comments created locally, before any server round trip.
///
/// Ids never collide with the ids of the comments the generator was created from nor with each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalIdGenerator {
    counter: u64,
    known_ids: HashSet<String>,
}

impl Author {
    pub fn from_user(user: &User) -> Self {
        Author {
            id: user.user_id.clone(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }

    /// Returns the author identity of the viewer, or `None` when nobody is logged in.
    pub fn from_session(session: &Session) -> Option<Self> {
        session.user().map(Author::from_user)
    }
}

impl CommentNode {
    pub fn new(
        comment_id: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        create_timestamp: DateTime<Utc>,
        upvote_count: u32,
        downvote_count: u32,
        child_comments: Vec<CommentNode>,
    ) -> Self {
        CommentNode {
            comment_id: comment_id.into(),
            content: content.into(),
            author,
            create_timestamp,
            upvote_count,
            downvote_count,
            child_comments,
        }
    }

    /// Creates a comment authored by the viewer: no votes and no replies yet.
    pub fn new_local(
        comment_id: String,
        content: String,
        author: Author,
        create_timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(comment_id, content, author, create_timestamp, 0, 0, Vec::new())
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn create_timestamp(&self) -> DateTime<Utc> {
        self.create_timestamp
    }

    pub fn upvote_count(&self) -> u32 {
        self.upvote_count
    }

    pub fn downvote_count(&self) -> u32 {
        self.downvote_count
    }

    pub fn child_comments(&self) -> &[CommentNode] {
        &self.child_comments
    }

    pub fn has_children(&self) -> bool {
        !self.child_comments.is_empty()
    }

    /// Number of direct replies.
    pub fn child_count(&self) -> usize {
        self.child_comments.len()
    }

    /// Number of comments in the subtree rooted at this comment, excluding itself.
    pub fn count_descendants(&self) -> usize {
        self.child_comments.iter().map(|child| 1 + child.count_descendants()).sum()
    }

    /// Appends a reply after the existing ones.
    pub(crate) fn push_child(&mut self, comment: CommentNode) {
        self.child_comments.push(comment);
    }
}

impl LocalIdGenerator {
    pub fn from_comments(comment_vec: &[CommentNode]) -> Self {
        let mut known_ids = HashSet::new();
        collect_comment_ids(comment_vec, &mut known_ids);
        LocalIdGenerator {
            counter: 0,
            known_ids,
        }
    }

    pub fn next_id(&mut self) -> String {
        loop {
            self.counter += 1;
            let comment_id = format!("{LOCAL_COMMENT_ID_PREFIX}{}", self.counter);
            if self.known_ids.insert(comment_id.clone()) {
                return comment_id;
            }
        }
    }
}

fn collect_comment_ids(comment_vec: &[CommentNode], comment_ids: &mut HashSet<String>) {
    for comment in comment_vec {
        comment_ids.insert(comment.comment_id.clone());
        collect_comment_ids(&comment.child_comments, comment_ids);
    }
}

/// Finds the comment with id `comment_id` at any depth.
pub fn find_comment<'a>(comment_vec: &'a [CommentNode], comment_id: &str) -> Option<&'a CommentNode> {
    comment_vec.iter().find_map(|comment| match comment.comment_id == comment_id {
        true => Some(comment),
        false => find_comment(&comment.child_comments, comment_id),
    })
}

/// Finds the comment with id `comment_id` at any depth, for modification.
pub fn find_comment_mut<'a>(comment_vec: &'a mut [CommentNode], comment_id: &str) -> Option<&'a mut CommentNode> {
    comment_vec.iter_mut().find_map(|comment| match comment.comment_id == comment_id {
        true => Some(comment),
        false => find_comment_mut(&mut comment.child_comments, comment_id),
    })
}

/// Decodes the nested comments of a post and checks that they form a valid tree.
///
/// Fails when two comments share an id or when a comment has no content.
pub fn load_comment_tree(json: &str) -> Result<Vec<CommentNode>, AppError> {
    let comment_vec: Vec<CommentNode> = serde_json::from_str(json)?;
    check_comment_tree(&comment_vec)?;
    log::debug!("Loaded {} top-level comments.", comment_vec.len());
    Ok(comment_vec)
}

/// Checks that ids are unique and contents non-empty in the whole tree.
pub fn check_comment_tree(comment_vec: &[CommentNode]) -> Result<(), AppError> {
    let mut comment_ids = HashSet::new();
    let mut stack: Vec<&CommentNode> = comment_vec.iter().collect();
    while let Some(comment) = stack.pop() {
        if !comment_ids.insert(comment.comment_id.as_str()) {
            return Err(AppError::MalformedCommentTree(format!("Duplicate comment id {}", comment.comment_id)));
        }
        if comment.content.trim().is_empty() {
            return Err(AppError::MalformedCommentTree(format!("Comment {} has no content", comment.comment_id)));
        }
        stack.extend(comment.child_comments.iter());
    }
    Ok(())
}
