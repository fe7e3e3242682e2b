pub mod app;
pub mod comment;
pub mod errors;
pub mod icons;
pub mod post;
pub mod ranking;
pub mod state;
pub mod widget;
