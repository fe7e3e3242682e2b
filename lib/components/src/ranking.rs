use leptos::prelude::*;

use agora_core::ranking::VoteValue;

use crate::icons::{MinusIcon, PlusIcon, ScoreIcon};

/// Dynamic score indicator, that can be updated through the given signal
#[component]
pub fn DynScoreIndicator(
    #[prop(into)]
    score: Signal<i64>
) -> impl IntoView {
    view! {
        <div class="flex rounded-btn gap-1 items-center">
            <ScoreIcon/>
            <div class="w-fit text-sm text-right">
                {move || score.get()}
            </div>
        </div>
    }.into_any()
}

/// Component to display and modify the score of a post or comment.
///
/// `on_vote` is called with `true` for a click on the upvote button and `false` for the downvote button.
#[component]
pub fn VotePanel(
    #[prop(into)]
    score: Signal<i64>,
    #[prop(into)]
    vote: Signal<VoteValue>,
    on_vote: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <button
                class=get_vote_button_css(vote, true)
                aria-label="Upvote"
                on:click=move |_| on_vote.run(true)
            >
                <PlusIcon/>
            </button>
            <DynScoreIndicator score/>
            <button
                class=get_vote_button_css(vote, false)
                aria-label="Downvote"
                on:click=move |_| on_vote.run(false)
            >
                <MinusIcon/>
            </button>
        </div>
    }.into_any()
}

// Function to obtain the css classes of a vote button
pub fn get_vote_button_css(vote: Signal<VoteValue>, is_upvote: bool) -> Signal<&'static str> {
    let activated_value = match is_upvote {
        true => VoteValue::Up,
        false => VoteValue::Down,
    };

    Signal::derive(move || match (is_upvote, vote.get() == activated_value) {
        (true, true) => "p-1 rounded-full bg-success",
        (true, false) => "p-1 rounded-full hover:bg-success",
        (false, true) => "p-1 rounded-full bg-error",
        (false, false) => "p-1 rounded-full hover:bg-error",
    })
}
