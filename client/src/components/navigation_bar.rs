//! Top navigation bar for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell only mounts this while the session is `Authenticated`. It hosts
//! the room links, the theme toggle, and the menu holding the logout
//! affordance; logging out flips session state and the route gate takes it
//! from there.

#[cfg(test)]
#[path = "navigation_bar_test.rs"]
mod navigation_bar_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;
use crate::util::auth::logout;
use crate::util::route_gate::RoutePath;
use crate::util::session_store::BrowserSessionStore;

/// Class list for a decorative side panel.
pub fn side_class(base: &str, flipped: bool, dark: bool) -> String {
    let mut class = base.to_owned();
    if flipped {
        class.push_str(" flipped");
    }
    if dark {
        class.push(' ');
        class.push_str(base);
        class.push_str("Dark");
    }
    class
}

#[component]
pub fn NavigationBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let menu_open = RwSignal::new(false);
    let flipped = RwSignal::new(false);

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        menu_open.set(false);
        session.update(|s| logout(&BrowserSessionStore, s));
    };
    let on_flip = move |_| flipped.update(|f| *f = !*f);
    let nav_class = move |base: &'static str| move || theme.get().modifier(base);

    view! {
        <div class="navigation">
            <div class=nav_class("navigationContainer")>
                <ThemeToggle/>
                <a href=RoutePath::Ambient.as_str() class=nav_class("ambient-nav")>"AMBIENT"</a>
                <a href=RoutePath::Main.as_str() class=nav_class("main-nav")>"MAIN"</a>
                <a href=RoutePath::Dark.as_str() class=nav_class("dark-nav")>"DARK"</a>
                <div class=nav_class("menu-nav") on:click=move |_| menu_open.update(|o| *o = !*o)>
                    "MENU"
                    <Show when=move || menu_open.get()>
                        <div class="menu-links">
                            <a href=RoutePath::Profile.as_str() class="profileButton">"PROFILE"</a>
                            <div class="logOutButton" on:click=on_logout>"LOG OUT"</div>
                        </div>
                    </Show>
                </div>
            </div>
            <div class="sidesContainer">
                <div
                    class=move || side_class("rightSide", flipped.get(), theme.get().dark)
                    on:click=on_flip
                ></div>
                <div
                    class=move || side_class("leftSide", flipped.get(), theme.get().dark)
                    on:click=on_flip
                ></div>
            </div>
        </div>
    }
}
