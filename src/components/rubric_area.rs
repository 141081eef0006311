//! One rubric area row: leveled descriptions, suggestions, continuum slider.

use leptos::prelude::*;

use crate::components::level_marker::LevelMarker;
use crate::data::rubric::Area;
use crate::state::rubric::{display_index, AreaKey, RubricState};
use crate::util::marker_math::divider_fraction;

/// Assessed area: title column, one column per support tier, a suggestions
/// panel for the active tier, and the continuum slider underneath.
///
/// The slider has `levels + 1` stops; the top stop re-displays the last
/// tier (see `state::rubric::display_index`).
#[component]
pub fn RubricArea(
    section_title: &'static str,
    area: &'static Area,
    state: RwSignal<RubricState>,
) -> impl IntoView {
    let key: AreaKey = (section_title, area.title);
    let levels = area.levels();
    let position = Signal::derive(move || state.with(|s| s.position(key)));
    let active = Signal::derive(move || display_index(position.get(), levels));
    let track_ref = NodeRef::<leptos::html::Div>::new();

    view! {
        <div class="rubric-area">
            <div class="rubric-area__row">
                <div class="rubric-area__title">{area.title}</div>

                {(0..levels)
                    .map(|idx| {
                        view! {
                            <div
                                class="rubric-area__level"
                                class=("rubric-area__level--active", move || idx == active.get())
                            >
                                <b>{area.label(idx)}</b>
                                <div class="rubric-area__level-text">
                                    {area.descriptions.get(idx).copied().unwrap_or_default()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}

                <div class="rubric-area__suggestions">
                    <b>"Suggestions"</b>
                    <ul>
                        {move || {
                            let items = area.suggestions.get(active.get()).copied().unwrap_or(&[]);
                            items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </div>

            <div class="rubric-area__continuum">
                <div class="rubric-area__spacer rubric-area__spacer--title"></div>

                <div class="rubric-area__track" node_ref=track_ref>
                    <div class="rubric-area__track-bar"></div>
                    {(0..levels.saturating_sub(1))
                        .map(|k| {
                            view! {
                                <div
                                    class="rubric-area__divider"
                                    style:left=format!(
                                        "calc({}% - 2px)",
                                        divider_fraction(k, levels) * 100.0,
                                    )
                                ></div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <input
                        type="range"
                        class="rubric-area__slider"
                        min="0"
                        max=levels.to_string()
                        step="1"
                        prop:value=move || position.get().to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<usize>().unwrap_or(0);
                            state.update(|s| s.set_position(key, value, levels));
                        }
                    />
                    <LevelMarker position=position levels=levels track_ref=track_ref/>
                </div>

                <div class="rubric-area__spacer rubric-area__spacer--suggestions"></div>
            </div>
        </div>
    }
}

/// Empty notes row closing a rubric section: label cell, one blank cell per
/// tier column, and a blank suggestions cell.
#[component]
pub fn NotesRow() -> impl IntoView {
    view! {
        <div class="rubric-notes">
            <div class="rubric-notes__label">
                <b>"Notes:"</b>
            </div>
            {(0..4)
                .map(|_| view! { <div class="rubric-notes__cell"></div> })
                .collect::<Vec<_>>()}
            <div class="rubric-notes__suggestions"></div>
        </div>
    }
}
