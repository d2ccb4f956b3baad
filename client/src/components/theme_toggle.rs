//! Dark/light toggle button shared by the login view and the navigation bar.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let on_click = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        dark_mode::persist(next.dark);
    };

    view! {
        <button class="darkModeButton" on:click=on_click>
            {move || theme.get().toggle_label()}
        </button>
    }
}
