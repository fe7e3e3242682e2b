use leptos::prelude::*;

use agora_utils::errors::AppError;

use crate::icons::ErrorIcon;

/// Displays an error
#[component]
pub fn ErrorDisplay(
    error: AppError
) -> impl IntoView {
    let user_message = error.user_message();

    log::error!("Caught error: {error}");
    view! {
        <div class="w-full flex items-center gap-2 justify-center">
            <ErrorIcon/>
            <h3 class="text-xl">{user_message}</h3>
        </div>
    }.into_any()
}
