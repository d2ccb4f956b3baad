//! Room feeds: main (with the create-post form), ambient and dark.

use leptos::prelude::*;

use crate::components::create_post::CreatePostForm;
use crate::components::post_card::PostList;
use crate::net::types::Room;
use crate::state::feed::FeedState;

fn room_posts(room: Room) -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let posts = feed.with_untracked(|f| f.in_room(room));
    view! { <PostList posts=posts/> }
}

#[component]
pub fn MainPage() -> impl IntoView {
    view! {
        <div class="mainPage">
            <CreatePostForm/>
            {room_posts(Room::Main)}
        </div>
    }
}

#[component]
pub fn AmbientRoom() -> impl IntoView {
    view! {
        <div class="roomPage roomPage--ambient">
            {room_posts(Room::Ambient)}
        </div>
    }
}

#[component]
pub fn DarkRoom() -> impl IntoView {
    view! {
        <div class="roomPage roomPage--dark">
            {room_posts(Room::Dark)}
        </div>
    }
}
