use super::*;

use crate::data::options::SummaryPrompts;

static OPTIONS: &[OptionItem] = &[
    OptionItem {
        id: "pref-seating",
        label: "Preferential seating",
        description: None,
    },
    OptionItem {
        id: "alt-seating",
        label: "Alternative seating",
        description: Some("Wobble stools, standing desks, cushions."),
    },
    OptionItem {
        id: "other",
        label: "Other (describe)",
        description: None,
    },
];

static PROMPTS: SummaryPrompts = SummaryPrompts {
    none: "No supports required.",
    choose: "Select all that apply.",
    empty: "Nothing selected.",
};

fn yes_state() -> QuestionnaireState {
    QuestionnaireState {
        gate: Gate::Yes,
        ..QuestionnaireState::default()
    }
}

// =============================================================
// build_summary
// =============================================================

#[test]
fn summary_is_none_message_while_gate_unset() {
    let state = QuestionnaireState::default();
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), PROMPTS.none);
}

#[test]
fn summary_is_none_message_when_gate_no_regardless_of_selections() {
    let mut state = yes_state();
    state.toggle("pref-seating");
    state.other_text = "custom".to_owned();
    state.gate = Gate::No;
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), PROMPTS.none);
}

#[test]
fn summary_prompts_to_choose_when_nothing_entered() {
    let state = yes_state();
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), PROMPTS.choose);
}

#[test]
fn summary_prompts_to_choose_when_other_text_is_whitespace_only() {
    let mut state = yes_state();
    state.other_text = "   ".to_owned();
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), PROMPTS.choose);
}

#[test]
fn summary_falls_back_when_only_other_chosen_with_blank_text() {
    let mut state = yes_state();
    state.toggle("other");
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), PROMPTS.empty);
}

#[test]
fn summary_joins_labels_in_option_list_order() {
    let mut state = yes_state();
    // Insertion order is the reverse of the option list's declared order.
    state.toggle("alt-seating");
    state.toggle("pref-seating");
    assert_eq!(
        build_summary(&state, OPTIONS, &PROMPTS),
        "Preferential seating, Alternative seating"
    );
}

#[test]
fn summary_uses_trimmed_other_text() {
    let mut state = yes_state();
    state.toggle("other");
    state.other_text = "  custom note  ".to_owned();
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), "custom note");
}

#[test]
fn summary_appends_other_text_after_option_labels() {
    let mut state = yes_state();
    state.toggle("pref-seating");
    state.toggle("other");
    state.other_text = "weighted lap pad".to_owned();
    assert_eq!(
        build_summary(&state, OPTIONS, &PROMPTS),
        "Preferential seating, weighted lap pad"
    );
}

#[test]
fn summary_ignores_other_text_when_other_not_chosen() {
    let mut state = yes_state();
    state.toggle("pref-seating");
    state.other_text = "stray text".to_owned();
    assert_eq!(build_summary(&state, OPTIONS, &PROMPTS), "Preferential seating");
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_twice_restores_membership() {
    let mut state = yes_state();
    state.toggle("pref-seating");
    assert!(state.is_chosen("pref-seating"));
    state.toggle("pref-seating");
    assert!(!state.is_chosen("pref-seating"));
}

#[test]
fn toggling_other_off_clears_text_and_readding_does_not_restore() {
    let mut state = yes_state();
    state.toggle("other");
    state.other_text = "held text".to_owned();

    state.toggle("other");
    assert!(state.other_text.is_empty());

    state.toggle("other");
    assert!(state.is_chosen("other"));
    assert!(state.other_text.is_empty());
}

#[test]
fn toggling_regular_option_off_leaves_other_text_alone() {
    let mut state = yes_state();
    state.toggle("other");
    state.other_text = "kept".to_owned();
    state.toggle("pref-seating");
    state.toggle("pref-seating");
    assert_eq!(state.other_text, "kept");
}

// =============================================================
// set_gate
// =============================================================

#[test]
fn gate_no_clears_selections_and_text() {
    let mut state = yes_state();
    state.toggle("alt-seating");
    state.other_text = "x".to_owned();

    state.set_gate(Gate::No);
    assert_eq!(state.gate, Gate::No);
    assert!(state.chosen.is_empty());
    assert!(state.other_text.is_empty());
}

#[test]
fn gate_back_to_yes_does_not_restore_cleared_state() {
    let mut state = yes_state();
    state.toggle("alt-seating");
    state.other_text = "x".to_owned();

    state.set_gate(Gate::No);
    state.set_gate(Gate::Yes);
    assert_eq!(state.gate, Gate::Yes);
    assert!(state.chosen.is_empty());
    assert!(state.other_text.is_empty());
}

#[test]
fn gate_yes_leaves_existing_selections_untouched() {
    let mut state = yes_state();
    state.toggle("alt-seating");
    state.other_text = "note".to_owned();

    state.set_gate(Gate::Yes);
    assert!(state.is_chosen("alt-seating"));
    assert_eq!(state.other_text, "note");
}

// =============================================================
// shows_other_input
// =============================================================

#[test]
fn other_input_shown_iff_other_chosen() {
    let mut state = yes_state();
    assert!(!state.shows_other_input());
    state.toggle("other");
    assert!(state.shows_other_input());
}

#[test]
fn other_input_hidden_when_gate_yes_but_other_not_chosen() {
    let mut state = yes_state();
    state.toggle("pref-seating");
    assert!(!state.shows_other_input());
}
