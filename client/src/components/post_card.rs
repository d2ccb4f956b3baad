//! Post card: caption, avatar, embedded player and like heart.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::components::soundcloud_player::SoundCloudPlayer;
use crate::net::types::Post;
use crate::state::feed::{FeedState, post_caption};

pub const AVATAR_SRC: &str = "/assets/icons/profile_photo.jpg";

pub fn heart_class(liked: bool) -> &'static str {
    if liked { "heartLiked" } else { "heart" }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let liked = {
        let id = post.id.clone();
        move || feed.with(|f| f.is_liked(&id))
    };
    let on_like = {
        let id = post.id.clone();
        move |_| feed.update(|f| f.toggle_like(&id))
    };

    view! {
        <div class="post">
            <div class="description">{post_caption(&post)}</div>
            <div class="postContainer">
                <img src=AVATAR_SRC alt="Icon" class="profileImage"/>
                <div class="postPlayer">
                    <SoundCloudPlayer url=post.track_url.clone()/>
                </div>
                <div class=move || heart_class(liked()) on:click=on_like>
                    "🖤"
                </div>
            </div>
        </div>
    }
}

/// Static list of post cards.
#[component]
pub fn PostList(posts: Vec<Post>) -> impl IntoView {
    view! {
        <div class="postList">
            {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
        </div>
    }
}
