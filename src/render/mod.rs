//! Rendering contract for front ends.
//!
//! The engine never renders anything itself. Front ends read a
//! [`BoardView`] after every click and draw one clickable element per
//! button, colored by [`ButtonColor`]; when `cleared` is set they draw a
//! win message and a control wired to the reset operation instead.

use serde::{Deserialize, Serialize};

use crate::core::{Board, OptionState};

/// Visual treatment of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    /// Unselected option.
    Neutral,
    /// The current selection.
    Primary,
    /// A recently mismatched option.
    Critical,
}

/// Fixed state → color lookup. A pure table, no dispatch.
#[must_use]
pub const fn button_color(state: OptionState) -> ButtonColor {
    match state {
        OptionState::Default => ButtonColor::Neutral,
        OptionState::Selected => ButtonColor::Primary,
        OptionState::Wrong => ButtonColor::Critical,
    }
}

/// One button as a front end should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonView {
    pub label: String,
    pub color: ButtonColor,
}

/// Flat snapshot of the board for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Buttons in board order. Empty once the board is cleared.
    pub buttons: Vec<ButtonView>,
    /// True when every pair has been matched; render the win screen.
    pub cleared: bool,
}

impl BoardView {
    /// Snapshot a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        Self {
            buttons: board
                .iter()
                .map(|o| ButtonView {
                    label: o.label.clone(),
                    color: button_color(o.state),
                })
                .collect(),
            cleared: board.is_won(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, PairMap};

    #[test]
    fn test_color_table() {
        assert_eq!(button_color(OptionState::Default), ButtonColor::Neutral);
        assert_eq!(button_color(OptionState::Selected), ButtonColor::Primary);
        assert_eq!(button_color(OptionState::Wrong), ButtonColor::Critical);
    }

    #[test]
    fn test_view_follows_board_order() {
        let pairs = PairMap::from_entries([("Poland", "Warsaw")]).unwrap();
        let board = crate::core::Board::deal(&pairs, &mut GameRng::new(3));
        let view = BoardView::of(&board);

        assert!(!view.cleared);
        let board_labels: Vec<_> = board.iter().map(|o| o.label.clone()).collect();
        let view_labels: Vec<_> = view.buttons.iter().map(|b| b.label.clone()).collect();
        assert_eq!(board_labels, view_labels);
        assert!(view.buttons.iter().all(|b| b.color == ButtonColor::Neutral));
    }

    #[test]
    fn test_cleared_view() {
        let pairs = PairMap::from_entries([("Poland", "Warsaw")]).unwrap();
        let board = crate::core::Board::deal(&pairs, &mut GameRng::new(3))
            .handle_click(&pairs, "Poland")
            .handle_click(&pairs, "Warsaw");
        let view = BoardView::of(&board);
        assert!(view.cleared);
        assert!(view.buttons.is_empty());
    }
}
