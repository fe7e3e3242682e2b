use leptos::prelude::*;

#[component]
pub fn AuthorIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/toolbar/author.svg" class=class/>
    }
}

#[component]
pub fn ClockIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/toolbar/clock.svg" class=class/>
    }
}

#[component]
pub fn CommentIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/toolbar/comment.svg" class=class/>
    }
}

#[component]
pub fn ErrorIcon(#[prop(default = "h-16 w-16")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/error.svg" class=class/>
    }
}

#[component]
pub fn MinusIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/minus.svg" class=class/>
    }
}

#[component]
pub fn PlusIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/plus.svg" class=class/>
    }
}

#[component]
pub fn SaveIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/toolbar/bookmark.svg" class=class/>
    }
}

#[component]
pub fn SavedIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/toolbar/bookmark_filled.svg" class=class/>
    }
}

#[component]
pub fn ScoreIcon(#[prop(default = "content-toolbar-icon-size")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/toolbar/score.svg" class=class/>
    }
}
