//! Upload page: notice banner, upload form, and format guidelines.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::guidelines_panel::FormatGuidelines;
use crate::components::upload_form::UploadForm;
use crate::upload::Notice;

fn parse_notice(raw: Option<&str>) -> Option<Notice> {
    raw.map(str::trim).and_then(Notice::from_query)
}

fn notice_class(notice: Notice) -> &'static str {
    if notice.is_error() { "notice notice--error" } else { "notice notice--ok" }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let query = use_query_map();
    let notice = move || query.with(|params| parse_notice(params.get("notice").as_deref()));

    view! {
        <main class="upload-page">
            <header class="upload-page__header">
                <h1>"UGC Budget Allocation"</h1>
                <p class="upload-page__subtitle">"Upload institution data as CSV or JSON."</p>
            </header>
            {move || {
                notice()
                    .map(|notice| {
                        view! { <p class=notice_class(notice)>{notice.message()}</p> }
                    })
            }}
            <UploadForm/>
            <FormatGuidelines/>
        </main>
    }
}
