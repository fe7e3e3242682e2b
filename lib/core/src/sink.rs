use agora_utils::errors::AppError;

use crate::comment::CommentNode;
use crate::ranking::{VoteTarget, VoteValue};

/// Receives the contributions of the viewer, for instance to forward them to a remote store.
///
/// Calls happen after the local state was updated. The result is only logged: a failing sink never alters
/// the local comment tree or votes.
pub trait ContentSink: Send + Sync {
    /// Called when a comment was added, `parent_id` is `None` for top-level comments.
    fn on_comment_submitted(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        comment: &CommentNode,
    ) -> Result<(), AppError>;

    fn on_vote(&self, target: VoteTarget, vote: VoteValue) -> Result<(), AppError>;
}

/// Sink that only logs what it receives.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ContentSink for LogSink {
    fn on_comment_submitted(
        &self,
        post_id: &str,
        parent_id: Option<&str>,
        comment: &CommentNode,
    ) -> Result<(), AppError> {
        log::info!(
            "Comment {} submitted on post {post_id} with parent {parent_id:?}",
            comment.comment_id()
        );
        Ok(())
    }

    fn on_vote(&self, target: VoteTarget, vote: VoteValue) -> Result<(), AppError> {
        log::info!("Vote {vote} on {target:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::comment::{Author, CommentNode};
    use crate::ranking::{VoteTarget, VoteValue};
    use crate::sink::{ContentSink, LogSink};

    #[test]
    fn test_log_sink() {
        let comment = CommentNode::new("c1", "content", Author::default(), Utc::now(), 0, 0, vec![]);
        assert_eq!(LogSink.on_comment_submitted("p1", None, &comment), Ok(()));
        assert_eq!(LogSink.on_comment_submitted("p1", Some("c0"), &comment), Ok(()));
        assert_eq!(LogSink.on_vote(VoteTarget::Post(String::from("p1")), VoteValue::Up), Ok(()));
    }
}
