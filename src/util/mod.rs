//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure layout
//! math from page and component logic to improve reuse and testability.

pub mod dark_mode;
pub mod marker_math;
