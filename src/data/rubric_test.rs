use super::*;

// =============================================================
// Corpus invariants
// =============================================================

#[test]
fn every_area_pairs_descriptions_with_suggestions() {
    for section in &SECTIONS {
        for area in section.areas() {
            assert_eq!(
                area.descriptions.len(),
                area.suggestions.len(),
                "level mismatch in {} / {}",
                section.title,
                area.title
            );
        }
    }
}

#[test]
fn every_area_has_four_levels() {
    for section in &SECTIONS {
        for area in section.areas() {
            assert_eq!(area.levels(), 4, "in {} / {}", section.title, area.title);
        }
    }
}

#[test]
fn suggestion_sets_are_never_empty() {
    for section in &SECTIONS {
        for area in section.areas() {
            for (level, set) in area.suggestions.iter().enumerate() {
                assert!(!set.is_empty(), "{} / {} level {level}", section.title, area.title);
            }
        }
    }
}

#[test]
fn area_titles_are_unique_within_sections() {
    for section in &SECTIONS {
        let titles: Vec<_> = section.areas().map(|a| a.title).collect();
        let mut deduped = titles.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(titles.len(), deduped.len(), "in {}", section.title);
    }
}

#[test]
fn every_section_ends_with_a_notes_row() {
    for section in &SECTIONS {
        assert!(
            matches!(section.rows.last(), Some(Row::Notes)),
            "in {}",
            section.title
        );
    }
}

// =============================================================
// Level labels
// =============================================================

#[test]
fn label_falls_back_to_default_tiers() {
    let area = SECTIONS[0].areas().next().expect("at least one area");
    assert_eq!(area.label(0), DEFAULT_LEVEL_LABELS[0]);
    assert_eq!(area.label(3), DEFAULT_LEVEL_LABELS[3]);
}

#[test]
fn label_out_of_range_uses_numbered_placeholder() {
    let area = SECTIONS[0].areas().next().expect("at least one area");
    assert_eq!(area.label(7), "Level 8");
}

#[test]
fn override_labels_apply_only_when_lengths_match() {
    let area = Area {
        title: "Custom",
        descriptions: &["a", "b"],
        suggestions: &[&["s"], &["s"]],
        level_labels: Some(&["Low", "High"]),
    };
    assert_eq!(area.label(1), "High");

    let mismatched = Area {
        level_labels: Some(&["Only one"]),
        ..area
    };
    assert_eq!(mismatched.label(0), DEFAULT_LEVEL_LABELS[0]);
}
