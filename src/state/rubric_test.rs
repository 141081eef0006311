use super::*;

use crate::data::rubric::{Area, Row, Section, SECTIONS};

static SMALL: [Section; 2] = [
    Section {
        title: "First",
        rows: &[
            Row::Area(Area {
                title: "Alpha",
                descriptions: &["a", "b", "c", "d"],
                suggestions: &[&["s1"], &["s2"], &["s3"], &["s4"]],
                level_labels: None,
            }),
            Row::Notes,
        ],
    },
    Section {
        title: "Second",
        rows: &[Row::Area(Area {
            title: "Beta",
            descriptions: &["a", "b", "c", "d"],
            suggestions: &[&["s1"], &["s2"], &["s3"], &["s4"]],
            level_labels: None,
        })],
    },
];

// =============================================================
// Initialization
// =============================================================

#[test]
fn for_sections_starts_every_area_at_zero() {
    let state = RubricState::for_sections(&SMALL);
    assert_eq!(state.area_count(), 2);
    assert_eq!(state.position(("First", "Alpha")), 0);
    assert_eq!(state.position(("Second", "Beta")), 0);
}

#[test]
fn for_sections_skips_notes_rows() {
    let state = RubricState::for_sections(&SECTIONS);
    // 3 + 4 + 4 assessed areas; notes rows carry no slider.
    assert_eq!(state.area_count(), 11);
}

#[test]
fn unknown_key_reads_as_zero() {
    let state = RubricState::for_sections(&SMALL);
    assert_eq!(state.position(("First", "Missing")), 0);
}

// =============================================================
// set_position
// =============================================================

#[test]
fn set_position_round_trips() {
    let mut state = RubricState::for_sections(&SMALL);
    state.set_position(("First", "Alpha"), 3, 4);
    assert_eq!(state.position(("First", "Alpha")), 3);
    assert_eq!(state.position(("Second", "Beta")), 0);
}

#[test]
fn set_position_caps_at_top_stop() {
    let mut state = RubricState::for_sections(&SMALL);
    state.set_position(("First", "Alpha"), 9, 4);
    assert_eq!(state.position(("First", "Alpha")), 4);
}

// =============================================================
// ensure_sections guard
// =============================================================

#[test]
fn ensure_sections_is_noop_when_shape_matches() {
    let mut state = RubricState::for_sections(&SMALL);
    state.set_position(("First", "Alpha"), 2, 4);
    state.ensure_sections(&SMALL);
    assert_eq!(state.position(("First", "Alpha")), 2);
}

#[test]
fn ensure_sections_resets_stale_shape() {
    let mut state = RubricState::default();
    state.set_position(("Old", "Gone"), 3, 4);
    state.ensure_sections(&SMALL);
    assert_eq!(state, RubricState::for_sections(&SMALL));
}

#[test]
fn ensure_sections_resets_when_area_count_diverges() {
    let mut state = RubricState::for_sections(&SMALL[..1]);
    state.set_position(("First", "Alpha"), 4, 4);
    state.ensure_sections(&SMALL);
    assert_eq!(state.position(("First", "Alpha")), 0);
    assert_eq!(state.area_count(), 2);
}

// =============================================================
// display_index clamp
// =============================================================

#[test]
fn display_index_maps_labeled_stops_one_to_one() {
    for position in 0..4 {
        assert_eq!(display_index(position, 4), position);
    }
}

#[test]
fn display_index_top_stop_duplicates_last_tier() {
    assert_eq!(display_index(4, 4), display_index(3, 4));
    assert_eq!(display_index(4, 4), 3);
}

#[test]
fn display_index_handles_zero_levels() {
    assert_eq!(display_index(0, 0), 0);
    assert_eq!(display_index(5, 0), 0);
}
