//! Collapsible panel describing the expected upload format.

#[cfg(test)]
#[path = "guidelines_panel_test.rs"]
mod guidelines_panel_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::guidelines::GuidelinesPanel;
use crate::util::dom;

#[derive(Clone, Copy)]
struct FieldRow {
    field: &'static str,
    meaning: &'static str,
}

const FIELDS: &[FieldRow] = &[
    FieldRow { field: "name", meaning: "Institution name" },
    FieldRow { field: "infrastructure", meaning: "Infrastructure score, 0-10" },
    FieldRow { field: "faculty", meaning: "Faculty score, 0-10" },
    FieldRow { field: "research", meaning: "Research score, 0-10" },
    FieldRow { field: "students", meaning: "Student outcomes score, 0-10" },
    FieldRow { field: "placement", meaning: "Placement score, 0-10" },
];

/// Flip the panel between shown and hidden.
///
/// Starts from the body's rendered `display` when the DOM is available so the
/// glyph never drifts from what the user sees.
pub fn toggle_guidelines(body: NodeRef<html::Div>, panel: RwSignal<GuidelinesPanel>) {
    let current = dom::inline_display(body).unwrap_or_else(|| panel.get_untracked().display);
    panel.update(|state| {
        state.display = current;
        state.toggle();
    });
}

#[component]
pub fn FormatGuidelines() -> impl IntoView {
    let panel = RwSignal::new(GuidelinesPanel::default());
    let body = NodeRef::<html::Div>::new();

    view! {
        <section class="guidelines" class:open=move || panel.get().is_open()>
            <div class="guidelines__header" on:click=move |_| toggle_guidelines(body, panel)>
                <h2>"File format guidelines"</h2>
                <span id="toggleIcon" class="guidelines__icon">
                    {move || panel.get().glyph()}
                </span>
            </div>
            <div
                id="formatGuidelinesBody"
                class="guidelines__body"
                node_ref=body
                style:display=move || panel.get().display.as_css()
            >
                <p>
                    "Upload a CSV file with a header row, or a JSON array of objects, "
                    "one entry per institution."
                </p>
                <table class="guidelines__table">
                    <thead>
                        <tr>
                            <th>"Field"</th>
                            <th>"Meaning"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {FIELDS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td class="guidelines__field">{row.field}</td>
                                        <td>{row.meaning}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
