//! Viewer-local state of a comment tree and its depth-limited traversal.
//!
//! Comments themselves are immutable snapshots. What the viewer does with them (their vote, collapsed
//! replies, an open reply form) lives in a side table keyed by comment id, created lazily the first time a
//! comment is interacted with and dropped when the comment is unmounted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agora_utils::constants::{DEFAULT_MAX_COMMENT_DEPTH, HIDE_REPLIES_LABEL};
use agora_utils::errors::AppError;

use crate::comment::{Author, CommentNode};
use crate::composer::ReplyComposer;
use crate::ranking::{VoteState, VoteValue};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeConfig {
    /// Deepest level at which replies are still rendered. Top-level comments are at depth 0.
    pub max_depth: usize,
}

/// State of a comment that only exists for the current viewer and view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentViewState {
    pub vote: VoteState,
    pub replies_visible: bool,
    pub composer: ReplyComposer,
}

/// A comment as it should be displayed, produced by [`CommentTree::render`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RenderedComment {
    pub comment_id: String,
    pub depth: usize,
    pub content: String,
    pub author: Author,
    pub create_timestamp: DateTime<Utc>,
    pub score: i64,
    pub vote: VoteValue,
    pub child_count: usize,
    pub replies_visible: bool,
    /// Label of the control hiding or showing the replies, `None` when there are no replies.
    pub toggle_label: Option<String>,
    /// The comment has replies that are not rendered because it sits at the maximum depth.
    pub is_thread_truncated: bool,
    pub is_composer_open: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentTree {
    config: TreeConfig,
    view_state_map: HashMap<String, CommentViewState>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            max_depth: DEFAULT_MAX_COMMENT_DEPTH,
        }
    }
}

impl TreeConfig {
    pub fn new(max_depth: usize) -> Self {
        TreeConfig { max_depth }
    }

    /// Decodes a configuration from json, missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: TreeConfig = serde_json::from_str(json)?;
        log::debug!("Loaded comment tree configuration {config:?}");
        Ok(config)
    }

    /// Decodes the configuration when one is given, returns the default configuration otherwise.
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, AppError> {
        json.map_or_else(|| Ok(TreeConfig::default()), TreeConfig::from_json)
    }
}

impl CommentViewState {
    /// Fresh state of a mounted comment: no vote, replies visible, reply form closed.
    pub fn mount(comment: &CommentNode) -> Self {
        CommentViewState {
            vote: VoteState::mount(comment.upvote_count(), comment.downvote_count()),
            replies_visible: true,
            composer: ReplyComposer::default(),
        }
    }
}

/// Label of the control hiding or showing the replies of a comment.
pub fn get_replies_toggle_label(replies_visible: bool, child_count: usize) -> Option<String> {
    match (child_count, replies_visible) {
        (0, _) => None,
        (_, true) => Some(String::from(HIDE_REPLIES_LABEL)),
        (child_count, false) => Some(format!("Show {child_count} replies")),
    }
}

impl CommentTree {
    pub fn new(config: TreeConfig) -> Self {
        CommentTree {
            config,
            view_state_map: HashMap::new(),
        }
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Returns the state of `comment`, mounting it if needed.
    pub fn view_state_mut(&mut self, comment: &CommentNode) -> &mut CommentViewState {
        self.view_state_map
            .entry(comment.comment_id().to_string())
            .or_insert_with(|| CommentViewState::mount(comment))
    }

    /// Returns the state of `comment`, or the state it would get when mounted.
    pub fn view_state(&self, comment: &CommentNode) -> CommentViewState {
        self.view_state_map
            .get(comment.comment_id())
            .cloned()
            .unwrap_or_else(|| CommentViewState::mount(comment))
    }

    pub fn vote_state(&self, comment: &CommentNode) -> VoteState {
        match self.view_state_map.get(comment.comment_id()) {
            Some(view_state) => view_state.vote,
            None => VoteState::mount(comment.upvote_count(), comment.downvote_count()),
        }
    }

    pub fn replies_visible(&self, comment_id: &str) -> bool {
        self.view_state_map.get(comment_id).is_none_or(|view_state| view_state.replies_visible)
    }

    /// Hides or shows the replies of `comment` and returns whether they are now visible.
    ///
    /// The state of the replies themselves is left untouched. Comments without replies have no toggle,
    /// the call is ignored.
    pub fn toggle_replies(&mut self, comment: &CommentNode) -> bool {
        if !comment.has_children() {
            log::debug!("Ignore replies toggle on comment {} without replies.", comment.comment_id());
            return self.replies_visible(comment.comment_id());
        }
        let view_state = self.view_state_mut(comment);
        view_state.replies_visible = !view_state.replies_visible;
        view_state.replies_visible
    }

    pub fn toggle_label(&self, comment: &CommentNode) -> Option<String> {
        get_replies_toggle_label(self.replies_visible(comment.comment_id()), comment.child_count())
    }

    pub fn toggle_up(&mut self, comment: &CommentNode) -> VoteState {
        let vote = &mut self.view_state_mut(comment).vote;
        vote.toggle_up();
        *vote
    }

    pub fn toggle_down(&mut self, comment: &CommentNode) -> VoteState {
        let vote = &mut self.view_state_mut(comment).vote;
        vote.toggle_down();
        *vote
    }

    pub fn composer(&self, comment_id: &str) -> Option<&ReplyComposer> {
        self.view_state_map.get(comment_id).map(|view_state| &view_state.composer)
    }

    pub fn composer_mut(&mut self, comment: &CommentNode) -> &mut ReplyComposer {
        &mut self.view_state_mut(comment).composer
    }

    /// Drops the state of `comment` and of its replies, they get a fresh state the next time they are used.
    pub fn unmount(&mut self, comment: &CommentNode) {
        self.view_state_map.remove(comment.comment_id());
        for child_comment in comment.child_comments() {
            self.unmount(child_comment);
        }
    }

    pub fn unmount_all(&mut self) {
        self.view_state_map.clear();
    }

    /// Lists the comments to display in display order, each with its depth.
    ///
    /// Replies of collapsed comments are skipped, as are replies deeper than the configured maximum depth.
    pub fn render(&self, comment_vec: &[CommentNode]) -> Vec<RenderedComment> {
        let mut rendered_vec = Vec::new();
        for comment in comment_vec {
            self.render_comment(comment, 0, &mut rendered_vec);
        }
        rendered_vec
    }

    fn render_comment(&self, comment: &CommentNode, depth: usize, rendered_vec: &mut Vec<RenderedComment>) {
        let view_state = self.view_state(comment);
        let is_depth_exhausted = depth >= self.config.max_depth;
        rendered_vec.push(RenderedComment {
            comment_id: comment.comment_id().to_string(),
            depth,
            content: comment.content().to_string(),
            author: comment.author().clone(),
            create_timestamp: comment.create_timestamp(),
            score: view_state.vote.display_score(),
            vote: view_state.vote.vote(),
            child_count: comment.child_count(),
            replies_visible: view_state.replies_visible,
            toggle_label: get_replies_toggle_label(view_state.replies_visible, comment.child_count()),
            is_thread_truncated: is_depth_exhausted && comment.has_children(),
            is_composer_open: view_state.composer.is_open(),
        });
        if view_state.replies_visible && !is_depth_exhausted {
            for child_comment in comment.child_comments() {
                self.render_comment(child_comment, depth + 1, rendered_vec);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use agora_utils::constants::DEFAULT_MAX_COMMENT_DEPTH;
    use agora_utils::errors::AppError;
    use crate::comment::{Author, CommentNode};
    use crate::ranking::VoteValue;
    use crate::tree::{get_replies_toggle_label, CommentTree, TreeConfig};

    fn create_comment(comment_id: &str, child_comments: Vec<CommentNode>) -> CommentNode {
        CommentNode::new(comment_id, "content", Author::default(), Utc::now(), 10, 2, child_comments)
    }

    #[test]
    fn test_tree_config_default() {
        assert_eq!(TreeConfig::default().max_depth, DEFAULT_MAX_COMMENT_DEPTH);
        assert_eq!(TreeConfig::default().max_depth, 5);
    }

    #[test]
    fn test_tree_config_from_json() {
        assert_eq!(TreeConfig::from_json(r#"{"maxDepth": 3}"#), Ok(TreeConfig::new(3)));
        assert_eq!(TreeConfig::from_json(r#"{"maxDepth": 0}"#), Ok(TreeConfig::new(0)));
        assert_eq!(TreeConfig::from_json("{}"), Ok(TreeConfig::default()));
        assert!(matches!(TreeConfig::from_json(r#"{"maxDepth": -1}"#), Err(AppError::DeserializationError(_))));
        assert!(matches!(TreeConfig::from_json("deep"), Err(AppError::DeserializationError(_))));
    }

    #[test]
    fn test_tree_config_from_optional_json() {
        assert_eq!(TreeConfig::from_optional_json(Some(r#"{"maxDepth": 2}"#)), Ok(TreeConfig::new(2)));
        assert_eq!(TreeConfig::from_optional_json(None), Ok(TreeConfig::default()));
        assert!(TreeConfig::from_optional_json(Some("{")).is_err());
    }

    #[test]
    fn test_tree_config_deserialize() {
        let config: TreeConfig = serde_json::from_str(r#"{"maxDepth": 2}"#).expect("Config should deserialize.");
        assert_eq!(config, TreeConfig::new(2));
        let config: TreeConfig = serde_json::from_str("{}").expect("Empty config should deserialize.");
        assert_eq!(config, TreeConfig::default());
    }

    #[test]
    fn test_get_replies_toggle_label() {
        assert_eq!(get_replies_toggle_label(true, 0), None);
        assert_eq!(get_replies_toggle_label(false, 0), None);
        assert_eq!(get_replies_toggle_label(true, 3), Some(String::from("Hide replies")));
        assert_eq!(get_replies_toggle_label(false, 3), Some(String::from("Show 3 replies")));
        assert_eq!(get_replies_toggle_label(false, 1), Some(String::from("Show 1 replies")));
    }

    #[test]
    fn test_toggle_replies() {
        let comment = create_comment("a", vec![create_comment("b", vec![]), create_comment("c", vec![]), create_comment("d", vec![])]);
        let mut comment_tree = CommentTree::default();
        assert!(comment_tree.replies_visible("a"));
        assert_eq!(comment_tree.toggle_label(&comment), Some(String::from("Hide replies")));
        assert!(!comment_tree.toggle_replies(&comment));
        assert_eq!(comment_tree.toggle_label(&comment), Some(String::from("Show 3 replies")));
        assert!(comment_tree.toggle_replies(&comment));
        assert_eq!(comment_tree.toggle_label(&comment), Some(String::from("Hide replies")));
    }

    #[test]
    fn test_toggle_replies_without_children() {
        let comment = create_comment("a", vec![]);
        let mut comment_tree = CommentTree::default();
        assert!(comment_tree.toggle_replies(&comment));
        assert!(comment_tree.replies_visible("a"));
        assert_eq!(comment_tree.toggle_label(&comment), None);
    }

    #[test]
    fn test_vote_state_is_per_comment() {
        let comment_vec = vec![create_comment("a", vec![]), create_comment("b", vec![])];
        let mut comment_tree = CommentTree::default();
        let vote_state = comment_tree.toggle_up(&comment_vec[0]);
        assert_eq!((vote_state.vote(), vote_state.display_score()), (VoteValue::Up, 9));
        let vote_state = comment_tree.toggle_down(&comment_vec[1]);
        assert_eq!((vote_state.vote(), vote_state.display_score()), (VoteValue::Down, 7));
        assert_eq!(comment_tree.vote_state(&comment_vec[0]).display_score(), 9);

        let rendered_vec = comment_tree.render(&comment_vec);
        assert_eq!(rendered_vec[0].score, 9);
        assert_eq!(rendered_vec[0].vote, VoteValue::Up);
        assert_eq!(rendered_vec[1].score, 7);
        assert_eq!(rendered_vec[1].vote, VoteValue::Down);
    }

    #[test]
    fn test_unmount_resets_state() {
        let comment = create_comment("a", vec![create_comment("b", vec![create_comment("c", vec![])])]);
        let reply = &comment.child_comments()[0];
        let mut comment_tree = CommentTree::default();
        comment_tree.toggle_up(&comment);
        comment_tree.toggle_down(reply);
        comment_tree.toggle_replies(reply);
        comment_tree.composer_mut(&comment).open();

        comment_tree.unmount(&comment);

        assert_eq!(comment_tree.vote_state(&comment).vote(), VoteValue::None);
        assert_eq!(comment_tree.vote_state(&comment).display_score(), 8);
        assert_eq!(comment_tree.vote_state(reply).vote(), VoteValue::None);
        assert!(comment_tree.replies_visible("b"));
        assert!(comment_tree.composer("a").is_none());
    }

    #[test]
    fn test_unmount_all() {
        let comment = create_comment("a", vec![]);
        let mut comment_tree = CommentTree::default();
        comment_tree.toggle_up(&comment);
        comment_tree.unmount_all();
        assert_eq!(comment_tree.vote_state(&comment).vote(), VoteValue::None);
    }

    #[test]
    fn test_render_order_and_depth() {
        let comment_vec = vec![
            create_comment("a", vec![
                create_comment("b", vec![create_comment("c", vec![])]),
                create_comment("d", vec![]),
            ]),
            create_comment("e", vec![]),
        ];
        let comment_tree = CommentTree::default();
        let rendered: Vec<(String, usize)> = comment_tree.render(&comment_vec)
            .into_iter()
            .map(|comment| (comment.comment_id, comment.depth))
            .collect();
        assert_eq!(rendered, vec![
            (String::from("a"), 0),
            (String::from("b"), 1),
            (String::from("c"), 2),
            (String::from("d"), 1),
            (String::from("e"), 0),
        ]);
    }

    #[test]
    fn test_render_max_depth_zero() {
        let comment_vec = vec![create_comment("a", vec![create_comment("b", vec![])])];
        let comment_tree = CommentTree::new(TreeConfig::new(0));
        let rendered_vec = comment_tree.render(&comment_vec);
        assert_eq!(rendered_vec.len(), 1);
        assert!(rendered_vec[0].is_thread_truncated);
        assert_eq!(rendered_vec[0].child_count, 1);
        assert_eq!(rendered_vec[0].toggle_label, Some(String::from("Hide replies")));
    }

    #[test]
    fn test_render_composer_state() {
        let comment_vec = vec![create_comment("a", vec![])];
        let mut comment_tree = CommentTree::default();
        assert!(!comment_tree.render(&comment_vec)[0].is_composer_open);
        comment_tree.composer_mut(&comment_vec[0]).open();
        assert!(comment_tree.render(&comment_vec)[0].is_composer_open);
    }
}
