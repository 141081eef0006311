//! Static free-text consideration cell (playground, lunchroom, notes).

use leptos::prelude::*;

/// Labelled textarea with no state of its own.
#[component]
pub fn NotesCell(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = 5)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="notes-cell__label" for=id>
            {label}
        </label>
        <textarea
            id=id
            class="notes-cell__textarea"
            placeholder=placeholder
            rows=rows.to_string()
        ></textarea>
    }
}
