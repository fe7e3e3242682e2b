#![allow(dead_code)]

use chrono::Utc;
use rand::Rng;

use agora_core::comment::{Author, CommentNode};
use agora_core::ranking::VoteValue;

pub fn create_test_author(username: &str) -> Author {
    Author {
        id: format!("{username}-id"),
        username: String::from(username),
        avatar_url: format!("/{username}.png"),
    }
}

pub fn create_comment(comment_id: &str, child_comments: Vec<CommentNode>) -> CommentNode {
    CommentNode::new(
        comment_id,
        format!("content of {comment_id}"),
        create_test_author("author"),
        Utc::now(),
        10,
        2,
        child_comments,
    )
}

/// Creates a single chain of comments `depth-0 -> depth-1 -> ... -> depth-{max_depth}`.
pub fn create_comment_chain(max_depth: usize) -> CommentNode {
    let mut comment = create_comment(&format!("depth-{max_depth}"), vec![]);
    for depth in (0..max_depth).rev() {
        comment = create_comment(&format!("depth-{depth}"), vec![comment]);
    }
    comment
}

/// Creates a random tree with `comment_count` comments, returned as top-level comments.
pub fn create_random_comment_tree(comment_count: usize) -> Vec<CommentNode> {
    let mut rng = rand::rng();
    let mut id_vec: Vec<String> = Vec::with_capacity(comment_count);
    let mut parent_vec: Vec<Option<usize>> = Vec::with_capacity(comment_count);
    for index in 0..comment_count {
        let parent = match index > 0 && rng.random_bool(0.7) {
            true => Some(rng.random_range(0..index)),
            false => None,
        };
        id_vec.push(format!("c{index}"));
        parent_vec.push(parent);
    }
    build_subtree(None, &id_vec, &parent_vec)
}

fn build_subtree(parent: Option<usize>, id_vec: &[String], parent_vec: &[Option<usize>]) -> Vec<CommentNode> {
    parent_vec
        .iter()
        .enumerate()
        .filter(|(_, comment_parent)| **comment_parent == parent)
        .map(|(index, _)| create_comment(&id_vec[index], build_subtree(Some(index), id_vec, parent_vec)))
        .collect()
}

pub fn get_vote_offset(vote: VoteValue) -> i64 {
    match vote {
        VoteValue::Up => 1,
        VoteValue::None => 0,
        VoteValue::Down => -1,
    }
}

pub fn comment_ids(comment_vec: &[CommentNode]) -> Vec<&str> {
    comment_vec.iter().map(|comment| comment.comment_id()).collect()
}
