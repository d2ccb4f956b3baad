//! Post feed content and like toggles.
//!
//! Posts are a static sample set until the create-post form gains a backend;
//! likes are client-local and reset on reload.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::collections::HashSet;

use crate::net::types::{Post, Room};

/// Display name shown on the profile page and on sample posts.
pub const PROFILE_NAME: &str = "RAVEKIDD01";
const SAMPLE_TRACK: &str = "https://soundcloud.com/shtgnfestival/shtgn-pdcst-45-servicebot";

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub liked: HashSet<String>,
}

impl FeedState {
    /// Feed seeded with two sample posts per room.
    pub fn sample() -> Self {
        let posts = [Room::Main, Room::Ambient, Room::Dark]
            .into_iter()
            .flat_map(|room| {
                (1..=2).map(move |n| Post {
                    id: format!("{}-{n}", room_slug(room)),
                    author: PROFILE_NAME.to_owned(),
                    description: "Lovely music".to_owned(),
                    track_url: SAMPLE_TRACK.to_owned(),
                    room,
                })
            })
            .collect();
        Self {
            posts,
            liked: HashSet::new(),
        }
    }

    pub fn in_room(&self, room: Room) -> Vec<Post> {
        self.posts.iter().filter(|p| p.room == room).cloned().collect()
    }

    pub fn by_author(&self, author: &str) -> Vec<Post> {
        self.posts.iter().filter(|p| p.author == author).cloned().collect()
    }

    pub fn liked_posts(&self) -> Vec<Post> {
        self.posts.iter().filter(|p| self.liked.contains(&p.id)).cloned().collect()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn toggle_like(&mut self, id: &str) {
        if !self.liked.remove(id) {
            self.liked.insert(id.to_owned());
        }
    }
}

fn room_slug(room: Room) -> &'static str {
    match room {
        Room::Main => "main",
        Room::Ambient => "ambient",
        Room::Dark => "dark",
    }
}

/// Display line above a post card.
pub fn post_caption(post: &Post) -> String {
    format!("{}: \"{}\"", post.author, post.description)
}
