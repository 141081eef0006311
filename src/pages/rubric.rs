//! Support Rubric page: the interactive section/area grid.

use leptos::prelude::*;

use crate::components::rubric_area::{NotesRow, RubricArea};
use crate::data::rubric::{Row, SECTIONS};
use crate::state::rubric::RubricState;

/// Support Rubric page — owns the slider positions for every assessed area.
///
/// State is zeroed on mount and discarded on unmount; the shape guard
/// re-zeroes it if the stored keys no longer match the corpus.
#[component]
pub fn RubricPage() -> impl IntoView {
    let state = RwSignal::new(RubricState::for_sections(&SECTIONS));
    state.update(|s| s.ensure_sections(&SECTIONS));

    view! {
        <div class="rubric-page">
            <h2>"Support Rubric (Interactive)"</h2>

            {SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <div class="rubric-page__section">
                            <h3>{section.title}</h3>
                            {section
                                .rows
                                .iter()
                                .map(|row| match row {
                                    Row::Area(area) => {
                                        view! {
                                            <RubricArea
                                                section_title=section.title
                                                area=area
                                                state=state
                                            />
                                        }
                                            .into_any()
                                    }
                                    Row::Notes => view! { <NotesRow/> }.into_any(),
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
