//! Static form and rubric configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is compile-time data: option catalogs and prompt strings
//! for the questionnaire grid, and the section/area/description/suggestion
//! corpus for the support rubric. Nothing in this module is mutated at
//! runtime; views treat it as immutable configuration.

pub mod options;
pub mod rubric;
