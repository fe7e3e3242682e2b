use agora_utils::errors::AppError;

use crate::comment::{find_comment, find_comment_mut, Author, CommentNode, LocalIdGenerator};
use crate::composer::ReplyComposer;
use crate::ranking::{VoteState, VoteTarget};
use crate::sink::ContentSink;
use crate::tree::{CommentTree, RenderedComment, TreeConfig};

/// Comments of one post and everything the viewer does with them.
///
/// Top-level comments are kept newest first: a submitted top-level comment is inserted before the existing
/// ones. Replies are kept oldest first: a submitted reply is appended after its siblings.
pub struct CommentListController {
    post_id: String,
    top_level: Vec<CommentNode>,
    tree: CommentTree,
    composer: ReplyComposer,
    id_generator: LocalIdGenerator,
    sink: Option<Box<dyn ContentSink>>,
}

impl CommentListController {
    pub fn new(post_id: impl Into<String>, top_level: Vec<CommentNode>, config: TreeConfig) -> Self {
        let id_generator = LocalIdGenerator::from_comments(&top_level);
        CommentListController {
            post_id: post_id.into(),
            top_level,
            tree: CommentTree::new(config),
            composer: ReplyComposer::default(),
            id_generator,
            sink: None,
        }
    }

    /// Forwards submissions and votes to `sink`.
    pub fn with_sink(mut self, sink: impl ContentSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn top_level(&self) -> &[CommentNode] {
        &self.top_level
    }

    pub fn tree(&self) -> &CommentTree {
        &self.tree
    }

    pub fn find_comment(&self, comment_id: &str) -> Option<&CommentNode> {
        find_comment(&self.top_level, comment_id)
    }

    /// Number of top-level comments.
    pub fn count(&self) -> usize {
        self.top_level.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }

    pub fn comment_count_label(&self) -> String {
        format!("Comments ({})", self.count())
    }

    /// Composer of the top-level comment form.
    pub fn composer(&self) -> &ReplyComposer {
        &self.composer
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.composer.set_draft(draft);
    }

    /// Inserts a top-level comment built from the draft before the existing ones and returns its id.
    ///
    /// Returns `None` when the draft is blank or `author` is missing.
    pub fn submit_top_level(&mut self, author: Option<&Author>) -> Option<String> {
        let comment = self.composer.take_comment(author, &mut self.id_generator)?;
        let comment_id = comment.comment_id().to_string();
        log::debug!("Add top-level comment {comment_id} to post {}", self.post_id);
        self.notify_sink(|sink, post_id| sink.on_comment_submitted(post_id, None, &comment));
        self.top_level.insert(0, comment);
        Some(comment_id)
    }

    /// Appends a reply built from the draft of `parent_id` after its existing replies and returns its id.
    ///
    /// Returns `None` when the parent does not exist, the draft is blank or `author` is missing.
    pub fn submit_reply(&mut self, parent_id: &str, author: Option<&Author>) -> Option<String> {
        let Some(parent) = find_comment_mut(&mut self.top_level, parent_id) else {
            log::warn!("Cannot reply to unknown comment {parent_id}");
            return None;
        };
        let composer = self.tree.composer_mut(parent);
        let reply_id = composer.submit(parent, author, &mut self.id_generator)?;
        if let Some(reply) = find_comment(&self.top_level, &reply_id) {
            self.notify_sink(|sink, post_id| sink.on_comment_submitted(post_id, Some(parent_id), reply));
        }
        Some(reply_id)
    }

    pub fn reply_composer(&self, comment_id: &str) -> Option<&ReplyComposer> {
        self.tree.composer(comment_id)
    }

    /// Opens the reply form of `comment_id` when closed, closes it when open.
    pub fn toggle_reply(&mut self, comment_id: &str) {
        self.with_reply_composer(comment_id, ReplyComposer::toggle);
    }

    pub fn open_reply(&mut self, comment_id: &str) {
        self.with_reply_composer(comment_id, ReplyComposer::open);
    }

    pub fn cancel_reply(&mut self, comment_id: &str) {
        self.with_reply_composer(comment_id, ReplyComposer::cancel);
    }

    pub fn set_reply_draft(&mut self, comment_id: &str, draft: impl Into<String>) {
        let draft = draft.into();
        self.with_reply_composer(comment_id, |composer| composer.set_draft(draft));
    }

    fn with_reply_composer(&mut self, comment_id: &str, update: impl FnOnce(&mut ReplyComposer)) {
        match find_comment(&self.top_level, comment_id) {
            Some(comment) => update(self.tree.composer_mut(comment)),
            None => log::warn!("Cannot find comment {comment_id} to update its reply form"),
        }
    }

    /// Hides or shows the replies of `comment_id`, returns whether they are now visible.
    pub fn toggle_replies(&mut self, comment_id: &str) -> Option<bool> {
        let comment = find_comment(&self.top_level, comment_id)?;
        Some(self.tree.toggle_replies(comment))
    }

    pub fn toggle_up(&mut self, comment_id: &str) -> Option<VoteState> {
        self.toggle_vote(comment_id, true)
    }

    pub fn toggle_down(&mut self, comment_id: &str) -> Option<VoteState> {
        self.toggle_vote(comment_id, false)
    }

    fn toggle_vote(&mut self, comment_id: &str, is_upvote: bool) -> Option<VoteState> {
        let comment = find_comment(&self.top_level, comment_id)?;
        let vote_state = match is_upvote {
            true => self.tree.toggle_up(comment),
            false => self.tree.toggle_down(comment),
        };
        let target = VoteTarget::Comment {
            post_id: self.post_id.clone(),
            comment_id: comment_id.to_string(),
        };
        self.notify_sink(|sink, _| sink.on_vote(target, vote_state.vote()));
        Some(vote_state)
    }

    /// Drops the viewer-local state of every comment, as when the view is mounted again.
    pub fn remount(&mut self) {
        self.tree.unmount_all();
        self.composer.cancel();
    }

    pub fn render(&self) -> Vec<RenderedComment> {
        self.tree.render(&self.top_level)
    }

    fn notify_sink(&self, notify: impl FnOnce(&dyn ContentSink, &str) -> Result<(), AppError>) {
        if let Some(sink) = &self.sink {
            if let Err(error) = notify(sink.as_ref(), &self.post_id) {
                log::warn!("Failed to forward update of post {}: {error}", self.post_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::comment::{Author, CommentNode};
    use crate::comment_list::CommentListController;
    use crate::ranking::VoteValue;
    use crate::tree::TreeConfig;

    fn test_author() -> Author {
        Author {
            id: String::from("u1"),
            username: String::from("alice"),
            avatar_url: String::new(),
        }
    }

    fn create_comment(comment_id: &str, child_comments: Vec<CommentNode>) -> CommentNode {
        CommentNode::new(comment_id, "content", test_author(), Utc::now(), 2, 0, child_comments)
    }

    fn top_level_ids(controller: &CommentListController) -> Vec<&str> {
        controller.top_level().iter().map(|comment| comment.comment_id()).collect()
    }

    #[test]
    fn test_submit_top_level() {
        let author = test_author();
        let mut controller = CommentListController::new(
            "post",
            vec![create_comment("p1", vec![]), create_comment("p2", vec![])],
            TreeConfig::default(),
        );
        controller.set_draft("hi");
        let comment_id = controller.submit_top_level(Some(&author)).expect("Comment should be submitted.");

        assert_eq!(top_level_ids(&controller), vec![comment_id.as_str(), "p1", "p2"]);
        assert_eq!(controller.top_level()[0].content(), "hi");
        assert_eq!(controller.count(), 3);
        assert_eq!(controller.comment_count_label(), "Comments (3)");
        assert_eq!(controller.composer().draft(), "");
    }

    #[test]
    fn test_submit_top_level_rejected() {
        let author = test_author();
        let mut controller = CommentListController::new("post", vec![], TreeConfig::default());
        assert!(controller.is_empty());
        assert_eq!(controller.submit_top_level(Some(&author)), None);
        controller.set_draft("  ");
        assert_eq!(controller.submit_top_level(Some(&author)), None);
        controller.set_draft("hi");
        assert_eq!(controller.submit_top_level(None), None);
        assert!(controller.is_empty());
        assert_eq!(controller.comment_count_label(), "Comments (0)");
    }

    #[test]
    fn test_submit_reply() {
        let author = test_author();
        let mut controller = CommentListController::new(
            "post",
            vec![create_comment("a", vec![create_comment("b", vec![create_comment("c", vec![])])])],
            TreeConfig::default(),
        );
        controller.open_reply("b");
        controller.set_reply_draft("b", "reply");
        let reply_id = controller.submit_reply("b", Some(&author)).expect("Reply should be submitted.");

        let parent = controller.find_comment("b").expect("Parent should exist.");
        let child_ids: Vec<&str> = parent.child_comments().iter().map(|comment| comment.comment_id()).collect();
        assert_eq!(child_ids, vec!["c", reply_id.as_str()]);
        assert_eq!(controller.count(), 1);
        let composer = controller.reply_composer("b").expect("Composer should be mounted.");
        assert!(!composer.is_open());
        assert_eq!(composer.draft(), "");

        assert_eq!(controller.submit_reply("unknown", Some(&author)), None);
    }

    #[test]
    fn test_reply_to_collapsed_comment_stays_collapsed() {
        let author = test_author();
        let mut controller = CommentListController::new(
            "post",
            vec![create_comment("a", vec![create_comment("b", vec![])])],
            TreeConfig::default(),
        );
        assert_eq!(controller.toggle_replies("a"), Some(false));
        controller.set_reply_draft("a", "reply");
        controller.submit_reply("a", Some(&author)).expect("Reply should be submitted.");

        let rendered_vec = controller.render();
        assert_eq!(rendered_vec.len(), 1);
        assert_eq!(rendered_vec[0].toggle_label, Some(String::from("Show 2 replies")));
    }

    #[test]
    fn test_toggle_vote() {
        let mut controller = CommentListController::new(
            "post",
            vec![create_comment("a", vec![create_comment("b", vec![])])],
            TreeConfig::default(),
        );
        let vote_state = controller.toggle_up("b").expect("Comment should exist.");
        assert_eq!((vote_state.vote(), vote_state.display_score()), (VoteValue::Up, 3));
        let vote_state = controller.toggle_down("b").expect("Comment should exist.");
        assert_eq!((vote_state.vote(), vote_state.display_score()), (VoteValue::Down, 1));
        assert_eq!(controller.toggle_up("unknown"), None);

        controller.remount();
        assert_eq!(controller.render()[1].vote, VoteValue::None);
        assert_eq!(controller.render()[1].score, 2);
    }

    #[test]
    fn test_toggle_reply_form() {
        let mut controller = CommentListController::new("post", vec![create_comment("a", vec![])], TreeConfig::default());
        assert!(controller.reply_composer("a").is_none());
        controller.toggle_reply("a");
        assert!(controller.render()[0].is_composer_open);
        controller.set_reply_draft("a", "draft");
        controller.toggle_reply("a");
        assert!(!controller.render()[0].is_composer_open);
        assert_eq!(controller.reply_composer("a").map(|composer| composer.draft()), Some("draft"));
        controller.cancel_reply("a");
        assert_eq!(controller.reply_composer("a").map(|composer| composer.draft()), Some(""));
    }
}
