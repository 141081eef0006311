#[cfg(test)]
#[path = "rubric_test.rs"]
mod rubric_test;

use std::collections::HashMap;

use crate::data::rubric::Section;

/// Stable identifier for an assessed area: `(section title, area title)`.
///
/// Keying slider positions by this pair instead of a flat positional array
/// means reordering or inserting areas in the static corpus cannot shift a
/// stored level onto the wrong row.
pub type AreaKey = (&'static str, &'static str);

/// Slider positions for every assessed area in the rubric.
///
/// Lifecycle: zeroed when the rubric view mounts, mutated only by that
/// area's slider, discarded on unmount. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RubricState {
    positions: HashMap<AreaKey, usize>,
}

impl RubricState {
    /// All-zero state covering every area of `sections`.
    pub fn for_sections(sections: &[Section]) -> Self {
        let mut positions = HashMap::new();
        for section in sections {
            for area in section.areas() {
                positions.insert((section.title, area.title), 0);
            }
        }
        Self { positions }
    }

    /// Consistency guard against a stale state shape.
    ///
    /// If the stored key set no longer matches the corpus (e.g. after an
    /// edit to the static section data), reset everything to zero. A silent
    /// correction, not a user-visible action.
    pub fn ensure_sections(&mut self, sections: &[Section]) {
        let fresh = Self::for_sections(sections);
        let matches = self.positions.len() == fresh.positions.len()
            && fresh.positions.keys().all(|key| self.positions.contains_key(key));
        if !matches {
            *self = fresh;
        }
    }

    /// Current slider position for `key`, zero for unknown keys.
    pub fn position(&self, key: AreaKey) -> usize {
        self.positions.get(&key).copied().unwrap_or(0)
    }

    /// Store a slider position, capped at the track's top stop.
    ///
    /// The track deliberately has `levels + 1` stops (`0..=levels`), one
    /// more than there are labeled tiers; reads go through
    /// [`display_index`] to pick the tier to show.
    pub fn set_position(&mut self, key: AreaKey, value: usize, levels: usize) {
        self.positions.insert(key, value.min(levels));
    }

    pub fn area_count(&self) -> usize {
        self.positions.len()
    }
}

/// Map a slider position to the description/suggestion tier to display.
///
/// The top stop (`position == levels`) re-displays the last tier instead of
/// indexing out of bounds. That extra stop is intentional behavior carried
/// over from the paper rubric's "beyond maximum" marker position.
pub fn display_index(position: usize, levels: usize) -> usize {
    position.min(levels.saturating_sub(1))
}
