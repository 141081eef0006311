#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

use std::collections::HashSet;

use crate::data::options::{OptionItem, SummaryPrompts, OTHER_OPTION_ID};

/// Answer to the Yes/No question gating a questionnaire's checklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gate {
    #[default]
    Unset,
    Yes,
    No,
}

/// Selection state for one questionnaire category.
///
/// `chosen` holds option ids from the category's static option list, so ids
/// are `&'static str`. Selecting "other" opens a free-text input whose value
/// lives in `other_text`.
#[derive(Clone, Debug, Default)]
pub struct QuestionnaireState {
    pub gate: Gate,
    pub chosen: HashSet<&'static str>,
    pub other_text: String,
}

impl QuestionnaireState {
    /// Answer the gating question.
    ///
    /// Switching to "no" clears all selections and the other-text, no matter
    /// what was entered. Switching to "yes" leaves prior selections alone,
    /// so a no → yes round trip after the clear starts from a blank slate.
    pub fn set_gate(&mut self, gate: Gate) {
        if gate == Gate::No {
            self.chosen.clear();
            self.other_text.clear();
        }
        self.gate = gate;
    }

    /// Toggle membership of `id` in the chosen set.
    ///
    /// Removing "other" also clears the free-text as a side effect; re-adding
    /// it does not bring the text back.
    pub fn toggle(&mut self, id: &'static str) {
        if self.chosen.contains(id) {
            self.chosen.remove(id);
            if id == OTHER_OPTION_ID {
                self.other_text.clear();
            }
        } else {
            self.chosen.insert(id);
        }
    }

    pub fn is_chosen(&self, id: &str) -> bool {
        self.chosen.contains(id)
    }

    /// Whether the "other" free-text input is visible. Keyed off the
    /// checkbox alone, not off the gate being "yes".
    pub fn shows_other_input(&self) -> bool {
        self.chosen.contains(OTHER_OPTION_ID)
    }
}

/// Derive the human-readable summary line for a questionnaire.
///
/// Pure function of the state: labels of chosen options in option-list
/// order (never the "other" entry itself), with the trimmed other-text
/// appended when "other" is chosen and non-blank, joined with `", "`. Falls
/// back to the configured prompt strings when there is nothing to show.
pub fn build_summary(
    state: &QuestionnaireState,
    options: &[OptionItem],
    prompts: &SummaryPrompts,
) -> String {
    if state.gate != Gate::Yes {
        return prompts.none.to_owned();
    }

    let other = state.other_text.trim();
    if state.chosen.is_empty() && other.is_empty() {
        return prompts.choose.to_owned();
    }

    let mut labels: Vec<&str> = Vec::new();
    for option in options {
        if option.id != OTHER_OPTION_ID && state.chosen.contains(option.id) {
            labels.push(option.label);
        }
    }
    if state.chosen.contains(OTHER_OPTION_ID) && !other.is_empty() {
        labels.push(other);
    }

    if labels.is_empty() {
        return prompts.empty.to_owned();
    }

    labels.join(", ")
}
