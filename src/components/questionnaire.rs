//! Yes/No-gated questionnaire with a multi-select checklist and summary.

use leptos::prelude::*;

use crate::data::options::{OptionItem, QuestionnaireConfig, OTHER_OPTION_ID};
use crate::state::questionnaire::{build_summary, Gate, QuestionnaireState};

/// One questionnaire category: gate radios, checklist, and derived summary.
///
/// Owns its `QuestionnaireState` exclusively; nothing outside this component
/// reads or writes it. The checklist only renders while the gate is "yes",
/// and the "other" textarea only while its checkbox is checked.
#[component]
pub fn QuestionnaireGroup(config: &'static QuestionnaireConfig) -> impl IntoView {
    let state = RwSignal::new(QuestionnaireState::default());
    let summary = Memo::new(move |_| {
        state.with(|s| build_summary(s, config.options, &config.prompts))
    });

    let on_yes = move |_| state.update(|s| s.set_gate(Gate::Yes));
    let on_no = move |_| state.update(|s| s.set_gate(Gate::No));

    view! {
        <fieldset class="questionnaire">
            <legend class="questionnaire__prompt">{config.legend}</legend>
            <p class="questionnaire__description">{config.description}</p>

            <div class="questionnaire__radio-group" role="radiogroup" aria-label=config.aria_label>
                <label class="questionnaire__radio-option">
                    <input
                        type="radio"
                        name=config.name
                        value="yes"
                        prop:checked=move || state.with(|s| s.gate == Gate::Yes)
                        on:change=on_yes
                    />
                    <span>"Yes"</span>
                </label>
                <label class="questionnaire__radio-option">
                    <input
                        type="radio"
                        name=config.name
                        value="no"
                        prop:checked=move || state.with(|s| s.gate == Gate::No)
                        on:change=on_no
                    />
                    <span>"No"</span>
                </label>
            </div>

            <Show when=move || state.with(|s| s.gate == Gate::Yes)>
                <div class="questionnaire__options">
                    <p class="questionnaire__hint">"Select all that apply:"</p>
                    <ul class="questionnaire__option-list">
                        {config
                            .options
                            .iter()
                            .map(|option| option_row(option, state, config))
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>

            <div class="questionnaire__summary" aria-live="polite">
                <span class="questionnaire__summary-label">"Summary:"</span>
                <span>{move || summary.get()}</span>
            </div>
        </fieldset>
    }
}

/// Single checkbox row, with the free-text escape under the "other" entry.
fn option_row(
    option: &'static OptionItem,
    state: RwSignal<QuestionnaireState>,
    config: &'static QuestionnaireConfig,
) -> impl IntoView {
    let id = option.id;

    view! {
        <li>
            <label class="questionnaire__checkbox">
                <input
                    type="checkbox"
                    value=id
                    prop:checked=move || state.with(|s| s.is_chosen(id))
                    on:change=move |_| state.update(|s| s.toggle(id))
                />
                <span>
                    <span class="questionnaire__option-label">{option.label}</span>
                    {option.description.map(|text| {
                        view! { <span class="questionnaire__option-description">{text}</span> }
                    })}
                </span>
            </label>
            <Show when=move || {
                id == OTHER_OPTION_ID && state.with(QuestionnaireState::shows_other_input)
            }>
                <textarea
                    class="questionnaire__other-input"
                    prop:value=move || state.with(|s| s.other_text.clone())
                    on:input=move |ev| state.update(|s| s.other_text = event_target_value(&ev))
                    placeholder=config.other_placeholder
                    rows="2"
                ></textarea>
            </Show>
        </li>
    }
}
