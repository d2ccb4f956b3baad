//! Login page: loading splash, then username + invitation code form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting runs one `LoginFlow` cycle. On success the token is stored
//! immediately, the logo animates for `POST_LOGIN_DELAY`, and only then does
//! the session flip to `Authenticated`; the route gate then moves the user
//! to `/main`. Every timer started here is cancelled on unmount.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::ClientConfig;
use crate::state::login::{LOGIN_ERROR_MESSAGE, LoginFlow};
use crate::state::session::SessionState;
use crate::state::theme::ThemeState;
use crate::util::timer::TimerGuard;
#[cfg(feature = "hydrate")]
use crate::{
    net::api::HttpAuthApi,
    state::session::SessionEvent,
    util::auth::submit_login,
    util::session_store::BrowserSessionStore,
    util::timer::{BrowserSleep, run_after},
};

/// How long the loading splash stays up before the form appears.
pub const LOADING_SPLASH: Duration = Duration::from_secs(3);

pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Input class: `hasText` once the field is non-empty, `dark` in dark mode.
pub fn input_class(base: &str, value: &str, theme: ThemeState) -> String {
    let with_text = if value.is_empty() {
        base.to_owned()
    } else {
        format!("{base} hasText")
    };
    theme.modifier(&with_text)
}

pub fn logo_class(animate: bool) -> &'static str {
    if animate { "logo animateFont" } else { "logo" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let flow = RwSignal::new(LoginFlow::default());
    let loading = RwSignal::new(true);
    let guard = TimerGuard::new();

    #[cfg(feature = "hydrate")]
    {
        let splash_guard = guard.clone();
        leptos::task::spawn_local(async move {
            run_after(&BrowserSleep, LOADING_SPLASH, &splash_guard, move || loading.set(false)).await;
        });
    }

    let submit = Callback::new({
        let guard = guard.clone();
        move |()| {
            let Some(attempt) = flow.try_update(LoginFlow::begin_submit).flatten() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let api = HttpAuthApi::new(&config);
                let guard = guard.clone();
                leptos::task::spawn_local(async move {
                    let result = submit_login(&BrowserSessionStore, &api, &attempt).await;
                    let Some(delay) = flow.try_update(|f| f.finish(&result)).flatten() else {
                        return;
                    };
                    run_after(&BrowserSleep, delay, &guard, move || {
                        session.update(|s| s.transition(SessionEvent::LoginCompleted));
                    })
                    .await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (attempt, &config, &guard, session);
            }
        }
    });
    on_cleanup(move || guard.cancel());

    let on_key = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            submit.run(());
        }
    };

    view! {
        <div class="loginPage">
            {move || {
                if loading.get() {
                    view! {
                        <div class="backgroundImage">
                            <ProgressBar/>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="content">
                            <div class=move || theme.get().modifier("loginContainer")>
                                <ThemeToggle/>
                                <h1 class=move || logo_class(flow.get().animate_logo())>"ravekidd"</h1>
                                <input
                                    class=move || {
                                        input_class("usernameInput", &flow.get().username, theme.get())
                                    }
                                    type="text"
                                    placeholder="USERNAME"
                                    prop:value=move || flow.get().username
                                    on:input=move |ev| flow.update(|f| f.username = event_target_value(&ev))
                                    on:keydown=on_key
                                />
                                <input
                                    class=move || {
                                        input_class("codeInput", &flow.get().invitation_code, theme.get())
                                    }
                                    type="text"
                                    placeholder="INVITATION CODE"
                                    prop:value=move || flow.get().invitation_code
                                    on:input=move |ev| {
                                        flow.update(|f| f.invitation_code = event_target_value(&ev));
                                    }
                                    on:keydown=on_key
                                />
                                <button
                                    class=move || theme.get().modifier("enterButton")
                                    prop:disabled=move || flow.get().is_submitting()
                                    on:click=move |_| submit.run(())
                                >
                                    "ENTER"
                                </button>
                                <Show when=move || flow.get().show_error()>
                                    <p class="loginError">{LOGIN_ERROR_MESSAGE}</p>
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
