//! Root application component with routing, context providers, and the
//! route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! On start the shell validates the stored token exactly once. Until that
//! resolves every route shows a neutral loading view; afterwards each route
//! renders whatever `route_gate::resolve` decides for the current session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation_bar::NavigationBar;
use crate::config::ClientConfig;
use crate::pages::{
    login::LoginPage,
    profile::ProfilePage,
    rooms::{AmbientRoom, DarkRoom, MainPage},
};
use crate::state::{feed::FeedState, session::SessionState, theme::ThemeState};
use crate::util::route_gate::{RenderTarget, RoutePath, View, resolve};
#[cfg(feature = "hydrate")]
use crate::{
    net::api::HttpAuthApi, state::session::SessionEvent, util::auth::check_session, util::dark_mode,
    util::session_store::BrowserSessionStore,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(SessionState::default());
    let theme = RwSignal::new(ThemeState::default());
    let feed = RwSignal::new(FeedState::sample());

    provide_context(config.clone());
    provide_context(session);
    provide_context(theme);
    provide_context(feed);

    #[cfg(feature = "hydrate")]
    {
        // Stored preference is browser-only; apply it after hydration.
        Effect::new(move || theme.set(ThemeState { dark: dark_mode::read_preference() }));

        leptos::task::spawn_local(async move {
            let api = HttpAuthApi::new(&config);
            let verdict = check_session(&BrowserSessionStore, &api).await;
            session.update(|s| s.transition(SessionEvent::Validated(verdict.is_authenticated())));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/ravekidd.css"/>
        <Title text="ravekidd"/>

        <Router>
            <div class=move || theme.get().root_class()>
                <Show when=move || session.get().is_authenticated()>
                    <NavigationBar/>
                </Show>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Gated path=RoutePath::Login/> }/>
                    <Route path=StaticSegment("ambient") view=|| view! { <Gated path=RoutePath::Ambient/> }/>
                    <Route path=StaticSegment("main") view=|| view! { <Gated path=RoutePath::Main/> }/>
                    <Route path=StaticSegment("dark") view=|| view! { <Gated path=RoutePath::Dark/> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <Gated path=RoutePath::Profile/> }/>
                </Routes>
            </div>
        </Router>
    }
}

/// Render `path` through the route gate, redirecting when it says so.
#[component]
fn Gated(path: RoutePath) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let target = Memo::new(move |_| resolve(path, session.get()));

    Effect::new(move || {
        if session.get() == SessionState::Validating {
            return;
        }
        if let RenderTarget::Redirect(to) = target.get() {
            navigate(
                to.as_str(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || {
        if session.get() == SessionState::Validating {
            return view! { <div class="loadingText">"LOADING"</div> }.into_any();
        }
        match target.get() {
            RenderTarget::Render(view) => render_view(view),
            RenderTarget::Redirect(_) => ().into_any(),
        }
    }
}

fn render_view(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Ambient => view! { <AmbientRoom/> }.into_any(),
        View::Main => view! { <MainPage/> }.into_any(),
        View::Dark => view! { <DarkRoom/> }.into_any(),
        View::Profile => view! { <ProfilePage/> }.into_any(),
    }
}
