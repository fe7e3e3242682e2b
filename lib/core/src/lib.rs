pub mod comment;
pub mod comment_list;
pub mod composer;
pub mod post;
pub mod ranking;
pub mod sink;
pub mod tree;
