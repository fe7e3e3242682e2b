use leptos::prelude::*;

use agora_core::comment_list::CommentListController;
use agora_core::composer::is_draft_submittable;
use agora_core::tree::RenderedComment;
use agora_utils::constants::{COMMENT_PLACEHOLDER, CONTINUE_THREAD_LABEL, NO_COMMENTS_MESSAGE, REPLY_PLACEHOLDER};

use crate::ranking::VotePanel;
use crate::state::GlobalState;
use crate::widget::{AuthorWidget, TimeSinceWidget};

const DEPTH_TO_COLOR_MAPPING_SIZE: usize = 6;
const DEPTH_TO_COLOR_MAPPING: [&str; DEPTH_TO_COLOR_MAPPING_SIZE] = [
    "border-blue-500",
    "border-green-500",
    "border-yellow-500",
    "border-orange-500",
    "border-red-500",
    "border-violet-500",
];

/// Comment section of a post: header with the number of comments, form for a new comment and the comment tree
#[component]
pub fn CommentSection(
    controller: RwSignal<CommentListController>,
) -> impl IntoView {
    let header = move || controller.with(|controller| controller.comment_count_label());
    let is_empty = move || controller.with(|controller| controller.is_empty());

    view! {
        <div class="flex flex-col gap-2">
            <h2 class="text-xl font-semibold">{header}</h2>
            <CommentForm controller/>
            <Show
                when=move || !is_empty()
                fallback=|| view! { <div class="text-center p-4 text-gray-500">{NO_COMMENTS_MESSAGE}</div> }
            >
                <For
                    each=move || controller.with(|controller| controller.render())
                    key=|comment| comment.clone()
                    children=move |comment| view! { <CommentRow comment controller/> }
                />
            </Show>
        </div>
    }.into_any()
}

/// Form to add a top-level comment
#[component]
pub fn CommentForm(
    controller: RwSignal<CommentListController>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let draft = RwSignal::new(controller.with_untracked(|controller| controller.composer().draft().to_string()));
    let is_submit_disabled = move || {
        state.viewer.with(|viewer| !draft.with(|draft| is_draft_submittable(draft, viewer.as_ref())))
    };

    let submit = move |_| {
        let viewer = state.viewer.get_untracked();
        let comment_id = controller.try_update(|controller| controller.submit_top_level(viewer.as_ref())).flatten();
        if comment_id.is_some() {
            draft.set(String::new());
        }
    };

    view! {
        <div class="flex flex-col gap-1">
            <textarea
                class="textarea textarea-bordered w-full"
                placeholder=COMMENT_PLACEHOLDER
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    controller.update_untracked(|controller| controller.set_draft(value.clone()));
                    draft.set(value);
                }
            />
            <button
                class="button-primary self-end"
                disabled=is_submit_disabled
                on:click=submit
            >
                "Comment"
            </button>
        </div>
    }.into_any()
}

/// One rendered comment, indented according to its depth
#[component]
pub fn CommentRow(
    comment: RenderedComment,
    controller: RwSignal<CommentListController>,
) -> impl IntoView {
    let comment_id = StoredValue::new(comment.comment_id.clone());
    let row_css = format!(
        "flex flex-col gap-1 pt-2 pl-2 border-l-2 {}",
        DEPTH_TO_COLOR_MAPPING[comment.depth % DEPTH_TO_COLOR_MAPPING_SIZE],
    );
    let indent_style = format!("margin-left: {}rem", comment.depth);

    let on_vote = Callback::new(move |is_upvote: bool| {
        controller.update(|controller| comment_id.with_value(|comment_id| {
            match is_upvote {
                true => controller.toggle_up(comment_id),
                false => controller.toggle_down(comment_id),
            };
        }));
    });
    let toggle_reply = move |_| controller.update(|controller| comment_id.with_value(|comment_id| controller.toggle_reply(comment_id)));
    let toggle_replies = move |_| {
        controller.update(|controller| {
            comment_id.with_value(|comment_id| controller.toggle_replies(comment_id));
        })
    };
    let replies_toggle = comment.toggle_label.map(|label| view! {
        <button class="button-ghost text-sm" on:click=toggle_replies>{label}</button>
    });
    let continue_thread = comment.is_thread_truncated.then(|| view! {
        <div class="text-sm italic text-gray-500">{CONTINUE_THREAD_LABEL}</div>
    });
    let reply_form = comment.is_composer_open.then(|| view! { <ReplyForm comment_id=comment.comment_id.clone() controller/> });

    view! {
        <div class=row_css style=indent_style>
            <div class="flex gap-1 items-center">
                <AuthorWidget author=comment.author/>
                <TimeSinceWidget timestamp=comment.create_timestamp/>
            </div>
            <div class="text-sm whitespace-pre-wrap">{comment.content}</div>
            <div class="flex gap-2 items-center">
                <VotePanel score=comment.score vote=comment.vote on_vote/>
                <button class="button-ghost text-sm" on:click=toggle_reply>"Reply"</button>
                {replies_toggle}
            </div>
            {reply_form}
            {continue_thread}
        </div>
    }.into_any()
}

/// Form to reply to a comment
#[component]
pub fn ReplyForm(
    comment_id: String,
    controller: RwSignal<CommentListController>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let initial_draft = controller.with_untracked(|controller| {
        controller.reply_composer(&comment_id).map(|composer| composer.draft().to_string()).unwrap_or_default()
    });
    let draft = RwSignal::new(initial_draft);
    let comment_id = StoredValue::new(comment_id);
    let is_submit_disabled = move || {
        state.viewer.with(|viewer| !draft.with(|draft| is_draft_submittable(draft, viewer.as_ref())))
    };

    let submit = move |_| {
        let viewer = state.viewer.get_untracked();
        controller.update(|controller| {
            comment_id.with_value(|comment_id| controller.submit_reply(comment_id, viewer.as_ref()));
        });
    };
    let cancel = move |_| controller.update(|controller| comment_id.with_value(|comment_id| controller.cancel_reply(comment_id)));

    view! {
        <div class="flex flex-col gap-1">
            <textarea
                class="textarea textarea-bordered w-full text-sm"
                placeholder=REPLY_PLACEHOLDER
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    controller.update_untracked(|controller| {
                        comment_id.with_value(|comment_id| controller.set_reply_draft(comment_id, value.clone()))
                    });
                    draft.set(value);
                }
            />
            <div class="flex gap-1 justify-end">
                <button class="button-ghost text-sm" on:click=cancel>"Cancel"</button>
                <button class="button-primary text-sm" disabled=is_submit_disabled on:click=submit>"Reply"</button>
            </div>
        </div>
    }.into_any()
}
