//! Embedded SoundCloud widget for a shared track.

#[cfg(test)]
#[path = "soundcloud_player_test.rs"]
mod soundcloud_player_test;

use leptos::prelude::*;

const WIDGET_URL: &str = "https://w.soundcloud.com/player/";

/// Widget `src` for `track_url`. Everything outside `A-Za-z0-9-_.~` is
/// percent-encoded, including `'()!*`.
pub fn player_src(track_url: &str) -> String {
    format!("{WIDGET_URL}?url={}", urlencoding::encode(track_url))
}

#[component]
pub fn SoundCloudPlayer(#[prop(into)] url: String) -> impl IntoView {
    let src = player_src(&url);
    view! {
        <div class="soundcloud-player">
            <iframe
                title="SoundCloud Player"
                width="650"
                height="200"
                {..::leptos::tachys::html::attribute::custom::custom_attribute("scrolling", "no")}
                {..::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "no")}
                src=src
            ></iframe>
        </div>
    }
}
