//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the questionnaire and rubric form surfaces while
//! keeping their interactive state in the focused models under `state`.

pub mod level_marker;
pub mod nav_bar;
pub mod notes_cell;
pub mod questionnaire;
pub mod rubric_area;
