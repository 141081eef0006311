//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`questionnaire`, `rubric`) plus ambient `ui`
//! state so individual components can depend on small focused models. All
//! transition logic lives here as plain methods on plain structs, which
//! keeps it unit-testable without a browser.

pub mod questionnaire;
pub mod rubric;
pub mod ui;
