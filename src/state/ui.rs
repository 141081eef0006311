#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Ambient UI state shared across pages via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
