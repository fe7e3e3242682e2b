use leptos::prelude::*;

use agora_core::post::{Post, PostCardState};
use agora_core::ranking::{VoteTarget, VoteValue};
use agora_core::sink::ContentSink;

use crate::icons::{CommentIcon, SaveIcon, SavedIcon};
use crate::ranking::VotePanel;
use crate::widget::{AuthorWidget, TimeSinceWidget};

/// Card summarizing a post in a post list
#[component]
pub fn PostCard(
    post: Post,
    /// Receives the votes of the viewer on this post
    #[prop(optional)]
    on_vote: Option<Callback<(VoteTarget, VoteValue)>>,
) -> impl IntoView {
    let post_card_state = RwSignal::new(PostCardState::mount(&post));
    let post_id = StoredValue::new(post.post_id.clone());
    let score = Signal::derive(move || post_card_state.with(|state| state.vote.display_score()));
    let vote = Signal::derive(move || post_card_state.with(|state| state.vote.vote()));
    let is_saved = Signal::derive(move || post_card_state.with(|state| state.is_saved));

    let on_post_vote = Callback::new(move |is_upvote: bool| {
        post_card_state.update(|state| {
            match is_upvote {
                true => state.toggle_up(),
                false => state.toggle_down(),
            };
        });
        log::trace!("Post vote value {:?}", vote.get_untracked());
        if let Some(on_vote) = on_vote {
            on_vote.run((VoteTarget::Post(post_id.get_value()), vote.get_untracked()));
        }
    });

    let excerpt = post.excerpt();
    let comment_count_label = post.comment_count_label();
    let image = post.image_url.map(|image_url| view! {
        <img src=image_url class="w-full max-h-96 object-cover rounded-sm"/>
    });

    view! {
        <div class="flex gap-2 p-2 rounded-sm bg-base-200">
            <div class="flex flex-col items-center">
                <VotePanel score vote on_vote=on_post_vote/>
            </div>
            <div class="flex flex-col gap-1 w-full">
                <div class="flex gap-1 items-center text-sm">
                    <span class="font-semibold">{post.community.name}</span>
                    <AuthorWidget author=post.author/>
                    <TimeSinceWidget timestamp=post.create_timestamp/>
                </div>
                <h2 class="text-lg font-bold">{post.title}</h2>
                <div class="text-sm whitespace-pre-wrap">{excerpt}</div>
                {image}
                <div class="flex gap-2 items-center">
                    <div class="flex gap-1 items-center text-sm">
                        <CommentIcon/>
                        {comment_count_label}
                    </div>
                    <button
                        class="button-ghost"
                        aria-label="Save"
                        on:click=move |_| { post_card_state.update(|state| { state.toggle_saved(); }); }
                    >
                        { move || match is_saved.get() {
                            true => view! { <SavedIcon/> }.into_any(),
                            false => view! { <SaveIcon/> }.into_any(),
                        }}
                    </button>
                </div>
            </div>
        </div>
    }.into_any()
}

/// Creates a vote callback for [`PostCard`] forwarding the votes to `sink`
pub fn get_post_vote_callback(sink: impl ContentSink + 'static) -> Callback<(VoteTarget, VoteValue)> {
    Callback::new(move |(target, vote): (VoteTarget, VoteValue)| {
        if let Err(error) = sink.on_vote(target, vote) {
            log::warn!("Failed to forward post vote: {error}");
        }
    })
}
