//! Create-post form. Inputs hold a local draft; POST has no backend yet.

use leptos::prelude::*;

#[component]
pub fn CreatePostForm() -> impl IntoView {
    let link = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    view! {
        <div class="createPostContainer">
            <input
                class="linkInput"
                type="text"
                placeholder="LINK"
                prop:value=move || link.get()
                on:input=move |ev| link.set(event_target_value(&ev))
            />
            <input
                class="descriptionInput"
                type="text"
                placeholder="DESCRIPTION..."
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <div class="postButton">"POST"</div>
        </div>
    }
}
