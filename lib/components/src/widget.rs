use chrono::{DateTime, Utc};
use leptos::prelude::*;

use agora_core::comment::Author;
use agora_utils::time::get_elapsed_time_string;

use crate::icons::{AuthorIcon, ClockIcon};

/// Component to display the author of a post or comment
#[component]
pub fn AuthorWidget(
    author: Author,
) -> impl IntoView {
    let avatar = match author.avatar_url.is_empty() {
        true => view! { <AuthorIcon/> }.into_any(),
        false => view! { <img src=author.avatar_url class="h-6 w-6 rounded-full"/> }.into_any(),
    };
    view! {
        <div class="flex gap-1.5 items-center text-sm px-1">
            {avatar}
            <span class="font-medium">{author.username}</span>
        </div>
    }.into_any()
}

/// Component to display the time elapsed since a post or comment was created
#[component]
pub fn TimeSinceWidget(
    #[prop(into)]
    timestamp: Signal<DateTime<Utc>>
) -> impl IntoView {
    view! {
        <div class="flex gap-1.5 items-center text-sm px-1">
            <ClockIcon/>
            {
                move || get_elapsed_time_string(timestamp.get(), Utc::now())
            }
        </div>
    }.into_any()
}
