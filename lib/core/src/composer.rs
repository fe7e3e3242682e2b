use chrono::Utc;

use crate::comment::{Author, CommentNode, LocalIdGenerator};

/// Draft of a comment being written by the viewer.
///
/// Used both for replies to a comment and for the top-level comment form of a post.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReplyComposer {
    is_open: bool,
    draft: String,
}

impl ReplyComposer {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Opens the form when closed, closes it when open. The draft is kept.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Clears the draft and closes the form.
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.is_open = false;
    }

    /// Whether the submit control is enabled: the viewer is known and the draft has some non-whitespace content.
    pub fn can_submit(&self, author: Option<&Author>) -> bool {
        is_draft_submittable(&self.draft, author)
    }

    /// Creates a comment out of the draft, or returns `None` when it cannot be submitted.
    ///
    /// On success, the draft is cleared and the form closed.
    pub fn take_comment(
        &mut self,
        author: Option<&Author>,
        id_generator: &mut LocalIdGenerator,
    ) -> Option<CommentNode> {
        let author = match author {
            Some(author) if is_draft_submittable(&self.draft, Some(author)) => author,
            Some(_) => {
                log::debug!("Reject submission of empty comment.");
                return None;
            },
            None => {
                log::debug!("Reject submission without author.");
                return None;
            },
        };
        let comment = CommentNode::new_local(
            id_generator.next_id(),
            self.draft.trim().to_string(),
            author.clone(),
            Utc::now(),
        );
        self.cancel();
        Some(comment)
    }

    /// Appends a reply built from the draft at the end of `parent`'s replies and returns its id.
    ///
    /// Returns `None` and leaves `parent` untouched when the draft cannot be submitted.
    pub fn submit(
        &mut self,
        parent: &mut CommentNode,
        author: Option<&Author>,
        id_generator: &mut LocalIdGenerator,
    ) -> Option<String> {
        let reply = self.take_comment(author, id_generator)?;
        let reply_id = reply.comment_id().to_string();
        log::debug!("Add reply {reply_id} to comment {}", parent.comment_id());
        parent.push_child(reply);
        Some(reply_id)
    }
}

/// A draft can be submitted by a known author when it has some non-whitespace content.
pub fn is_draft_submittable(draft: &str, author: Option<&Author>) -> bool {
    author.is_some() && !draft.trim().is_empty()
}
