//! Board options: labeled buttons with a visual state tag.

use serde::{Deserialize, Serialize};

/// Visual/selection state of a single option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    /// Not part of any in-flight selection.
    Default,
    /// Awaiting a second click to attempt a match. At most one option
    /// on a board is in this state.
    Selected,
    /// Marked after the most recent mismatch. Cleared only when a new
    /// selection begins.
    Wrong,
}

impl Default for OptionState {
    fn default() -> Self {
        OptionState::Default
    }
}

/// One selectable labeled item on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardOption {
    /// Country or capital name drawn from the pair map.
    pub label: String,
    pub state: OptionState,
}

impl BoardOption {
    /// Create an option in the `Default` state.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: OptionState::default(),
        }
    }

    /// Copy of this option with a different state.
    #[must_use]
    pub fn with_state(&self, state: OptionState) -> Self {
        Self {
            label: self.label.clone(),
            state,
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.state == OptionState::Selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_state() {
        let opt = BoardOption::new("Oslo");
        assert_eq!(opt.label, "Oslo");
        assert_eq!(opt.state, OptionState::Default);
        assert!(!opt.is_selected());
    }

    #[test]
    fn test_with_state() {
        let opt = BoardOption::new("Oslo").with_state(OptionState::Selected);
        assert!(opt.is_selected());
        assert_eq!(opt.label, "Oslo");
    }

    #[test]
    fn test_state_serde_names() {
        let json = serde_json::to_string(&OptionState::Wrong).unwrap();
        assert_eq!(json, r#""wrong""#);
    }
}
