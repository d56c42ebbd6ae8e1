//! Upload form with the client-side file guard.
//!
//! The form posts natively to `/upload`; the guard only decides whether the
//! browser's default submission may run.

#[cfg(test)]
#[path = "upload_form_test.rs"]
mod upload_form_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::upload_form::{SelectionOutcome, UploadFormState};
use crate::util::dom::{self, BrowserEffects};

#[component]
pub fn UploadForm() -> impl IntoView {
    let form = RwSignal::new(UploadFormState::default());
    let file_input = NodeRef::<html::Input>::new();

    let on_change = move |_ev: leptos::ev::Event| {
        let name = dom::selected_file_name(file_input);
        let outcome = form
            .try_update(|state| state.select(name.as_deref()))
            .unwrap_or(SelectionOutcome::Empty);
        outcome.apply(&mut BrowserEffects::new(file_input));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let outcome = form.get_untracked().submit(dom::selected_file_count(file_input));
        if outcome.should_prevent_default() {
            ev.prevent_default();
        }
        outcome.apply(&mut BrowserEffects::new(file_input));
    };

    view! {
        <form
            class="upload-form"
            action="/upload"
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <label class="upload-form__label" for="file">
                "Institution data file"
            </label>
            <input
                class="upload-form__input"
                type="file"
                id="file"
                name="file"
                node_ref=file_input
                on:change=on_change
            />
            <button
                class="upload-form__submit"
                type="submit"
                disabled=move || !form.get().submit_enabled
            >
                "Upload"
            </button>
        </form>
    }
}
