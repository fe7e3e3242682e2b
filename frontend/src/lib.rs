use leptos::prelude::*;

use agora_components::app::CommentApp;
use agora_components::errors::ErrorDisplay;
use agora_components::state::load_session;
use agora_core::comment::load_comment_tree;
use agora_core::post::Post;
use agora_core::tree::TreeConfig;

/// Mounts the post `post_json` and its comments in the page body.
///
/// `comment_tree_json` holds the nested comments of the post. `user_json` and `token` identify the viewer,
/// the viewer is anonymous when they are missing. `config_json` overrides the comment tree configuration,
/// e.g. `{"maxDepth": 3}`.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_post(
    post_json: String,
    comment_tree_json: String,
    user_json: Option<String>,
    token: Option<String>,
    config_json: Option<String>,
) {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    let initial_load = Post::from_json(&post_json).and_then(|post| {
        let comment_vec = load_comment_tree(&comment_tree_json)?;
        let session = load_session(user_json.as_deref(), token)?;
        let tree_config = TreeConfig::from_optional_json(config_json.as_deref())?;
        Ok((post, comment_vec, session, tree_config))
    });

    match initial_load {
        Ok((post, comment_vec, session, tree_config)) => {
            log::info!("Mount post {} with {} comments", post.post_id, comment_vec.len());
            leptos::mount::mount_to_body(move || view! {
                <CommentApp post comment_vec session tree_config/>
            })
        },
        Err(error) => leptos::mount::mount_to_body(move || view! { <ErrorDisplay error/> }),
    }
}
