use leptos::prelude::*;

use agora_auth::session::Session;
use agora_core::comment::CommentNode;
use agora_core::comment_list::CommentListController;
use agora_core::post::Post;
use agora_core::sink::LogSink;
use agora_core::tree::TreeConfig;

use crate::comment::CommentSection;
use crate::post::{get_post_vote_callback, PostCard};
use crate::state::GlobalState;

/// Root component displaying a post and its comments
#[component]
pub fn CommentApp(
    post: Post,
    comment_vec: Vec<CommentNode>,
    session: Session,
    #[prop(optional)]
    tree_config: TreeConfig,
) -> impl IntoView {
    let state = GlobalState::new(session, tree_config);
    provide_context(state);

    let controller = RwSignal::new(
        CommentListController::new(post.post_id.clone(), comment_vec, state.tree_config.get_value()).with_sink(LogSink)
    );

    view! {
        <main class="flex flex-col gap-4 max-w-3xl mx-auto p-4">
            <PostCard post on_vote=get_post_vote_callback(LogSink)/>
            <CommentSection controller/>
        </main>
    }.into_any()
}
