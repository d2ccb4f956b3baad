//! Profile page: the user's own posts and the posts they liked.

use leptos::prelude::*;

use crate::components::post_card::{AVATAR_SRC, PostList};
use crate::state::feed::{FeedState, PROFILE_NAME};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();
    let own_posts = feed.with_untracked(|f| f.by_author(PROFILE_NAME));
    let liked_posts = move || {
        let posts = feed.with(FeedState::liked_posts);
        view! { <PostList posts=posts/> }
    };

    view! {
        <div class="profilePage">
            <div class="profileContainer">
                <div class="yourPosts">"YOUR POSTS"</div>
                <div class="updateContainer">
                    <div class="updateUserName">{PROFILE_NAME}</div>
                    <div class="updateProfilePhoto">
                        <img src=AVATAR_SRC alt="Icon" class="userPhoto"/>
                    </div>
                </div>
                <div class="likedPosts">"LIKED POSTS"</div>
            </div>
            <div class="profileColumns">
                <div class="profilePost">
                    <PostList posts=own_posts/>
                </div>
                <div class="profileLiked">{liked_posts}</div>
            </div>
        </div>
    }
}
