//! The board and its click transition function.
//!
//! ## Lifecycle
//!
//! A board is dealt from a [`PairMap`] (one option per label, shuffled),
//! then advanced one click at a time. Every transition produces a whole
//! new board; callers never observe partial mutation. A correct match
//! removes both options, and the empty board is the terminal won state.
//!
//! ## Invariants
//!
//! - At most one option is `Selected` at any time
//! - Every label on the board is unique
//!
//! Both hold by construction: [`Board::deal`] selects nothing and the pair
//! map guarantees label uniqueness, and [`Board::handle_click`] never
//! produces a second selection.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::option::{BoardOption, OptionState};
use super::pairs::PairMap;
use super::rng::GameRng;

/// Ordered sequence of currently-unmatched options.
///
/// Backed by a persistent vector, so cloning and the whole-board
/// replacement done by [`Board::handle_click`] are cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    options: Vector<BoardOption>,
}

impl Board {
    /// Deal a fresh board: one option per country and one per capital,
    /// all `Default`, in a uniform random order.
    #[must_use]
    pub fn deal(pairs: &PairMap, rng: &mut GameRng) -> Self {
        let mut labels: Vec<&str> = pairs.labels().collect();
        rng.shuffle(&mut labels);
        Self {
            options: labels.into_iter().map(BoardOption::new).collect(),
        }
    }

    /// Number of options still on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True once every pair has been matched away.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Win condition: the board is empty.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_empty()
    }

    /// The option currently awaiting its match partner, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&BoardOption> {
        self.options.iter().find(|o| o.is_selected())
    }

    /// Option at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BoardOption> {
        self.options.get(index)
    }

    /// Iterate options in board order.
    pub fn iter(&self) -> impl Iterator<Item = &BoardOption> {
        self.options.iter()
    }

    /// Whether a label is still on the board.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.options.iter().any(|o| o.label == label)
    }

    /// Apply one click and return the resulting board.
    ///
    /// Exactly one of four branches fires:
    ///
    /// 1. Nothing selected: the clicked option becomes `Selected` and every
    ///    other option is forced back to `Default`, clearing stale `Wrong`
    ///    marks from the previous attempt.
    /// 2. The selected option itself was clicked: it reverts to `Default`.
    /// 3. The clicked label pairs with the selected label (either
    ///    direction): both options are removed.
    /// 4. Mismatch: both options are marked `Wrong`; everything else is
    ///    left untouched. The marks persist until branch 1 clears them.
    ///
    /// A label not present on the board is a caller error; the transition
    /// still returns a well-formed board (branch 1 then selects nothing).
    #[must_use]
    pub fn handle_click(&self, pairs: &PairMap, label: &str) -> Board {
        let Some(selected) = self.selected() else {
            return Board {
                options: self
                    .options
                    .iter()
                    .map(|o| {
                        if o.label == label {
                            o.with_state(OptionState::Selected)
                        } else {
                            o.with_state(OptionState::Default)
                        }
                    })
                    .collect(),
            };
        };

        if selected.label == label {
            return Board {
                options: self
                    .options
                    .iter()
                    .map(|o| {
                        if o.label == label {
                            o.with_state(OptionState::Default)
                        } else {
                            o.clone()
                        }
                    })
                    .collect(),
            };
        }

        if pairs.is_match(label, &selected.label) {
            let selected_label = selected.label.clone();
            return Board {
                options: self
                    .options
                    .iter()
                    .filter(|o| o.label != label && o.label != selected_label)
                    .cloned()
                    .collect(),
            };
        }

        let selected_label = selected.label.clone();
        Board {
            options: self
                .options
                .iter()
                .map(|o| {
                    if o.label == label || o.label == selected_label {
                        o.with_state(OptionState::Wrong)
                    } else {
                        o.clone()
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> PairMap {
        PairMap::from_entries([("Poland", "Warsaw"), ("Norway", "Oslo")]).unwrap()
    }

    fn dealt() -> Board {
        Board::deal(&pairs(), &mut GameRng::new(42))
    }

    #[test]
    fn test_deal_shape() {
        let board = dealt();
        assert_eq!(board.len(), 4);
        assert!(board.iter().all(|o| o.state == OptionState::Default));
        assert!(board.selected().is_none());

        let mut labels: Vec<_> = board.iter().map(|o| o.label.as_str()).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["Norway", "Oslo", "Poland", "Warsaw"]);
    }

    #[test]
    fn test_deal_is_seeded() {
        let a = Board::deal(&pairs(), &mut GameRng::new(9));
        let b = Board::deal(&pairs(), &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_click_selects() {
        let board = dealt().handle_click(&pairs(), "Poland");
        assert_eq!(board.len(), 4);
        assert_eq!(board.selected().map(|o| o.label.as_str()), Some("Poland"));
        assert_eq!(
            board
                .iter()
                .filter(|o| o.state == OptionState::Default)
                .count(),
            3
        );
    }

    #[test]
    fn test_self_click_deselects() {
        let p = pairs();
        let board = dealt().handle_click(&p, "Poland").handle_click(&p, "Poland");
        assert_eq!(board.len(), 4);
        assert!(board.selected().is_none());
        assert!(board.iter().all(|o| o.state == OptionState::Default));
    }

    #[test]
    fn test_correct_pair_removes_both() {
        let p = pairs();
        let board = dealt().handle_click(&p, "Poland").handle_click(&p, "Warsaw");
        assert_eq!(board.len(), 2);
        assert!(!board.contains_label("Poland"));
        assert!(!board.contains_label("Warsaw"));
        assert!(board.iter().all(|o| o.state == OptionState::Default));
    }

    #[test]
    fn test_correct_pair_capital_first() {
        let p = pairs();
        let board = dealt().handle_click(&p, "Warsaw").handle_click(&p, "Poland");
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_mismatch_marks_both_wrong() {
        let p = pairs();
        let board = dealt().handle_click(&p, "Poland").handle_click(&p, "Oslo");
        assert_eq!(board.len(), 4);
        assert!(board.selected().is_none());

        for opt in board.iter() {
            let expected = match opt.label.as_str() {
                "Poland" | "Oslo" => OptionState::Wrong,
                _ => OptionState::Default,
            };
            assert_eq!(opt.state, expected, "label {}", opt.label);
        }
    }

    #[test]
    fn test_new_selection_clears_wrong_marks() {
        let p = pairs();
        let board = dealt()
            .handle_click(&p, "Poland")
            .handle_click(&p, "Oslo")
            .handle_click(&p, "Poland");

        assert_eq!(board.selected().map(|o| o.label.as_str()), Some("Poland"));
        assert!(board.iter().all(|o| o.state != OptionState::Wrong));
    }

    #[test]
    fn test_wrong_marks_persist_until_reselection() {
        let p = pairs();
        let board = dealt().handle_click(&p, "Poland").handle_click(&p, "Oslo");

        // No further clicks: the two marks stay.
        assert_eq!(
            board
                .iter()
                .filter(|o| o.state == OptionState::Wrong)
                .count(),
            2
        );
    }

    #[test]
    fn test_wrong_option_can_still_be_matched() {
        let p = pairs();
        let board = dealt()
            .handle_click(&p, "Poland")
            .handle_click(&p, "Oslo")
            .handle_click(&p, "Poland")
            .handle_click(&p, "Warsaw");
        assert_eq!(board.len(), 2);
        assert!(board.contains_label("Norway"));
        assert!(board.contains_label("Oslo"));
    }

    #[test]
    fn test_full_clear_wins() {
        let p = pairs();
        let board = dealt()
            .handle_click(&p, "Poland")
            .handle_click(&p, "Warsaw")
            .handle_click(&p, "Oslo")
            .handle_click(&p, "Norway");
        assert!(board.is_won());
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn test_unknown_label_is_harmless() {
        let p = pairs();
        // Branch 1 with a label that matches nothing: no selection appears,
        // but the board stays well formed.
        let board = dealt().handle_click(&p, "Atlantis");
        assert_eq!(board.len(), 4);
        assert!(board.selected().is_none());
        assert!(board.iter().all(|o| o.state == OptionState::Default));
    }

    #[test]
    fn test_at_most_one_selected() {
        let p = pairs();
        let mut board = dealt();
        for label in ["Poland", "Oslo", "Norway", "Warsaw", "Norway"] {
            board = board.handle_click(&p, label);
            assert!(board.iter().filter(|o| o.is_selected()).count() <= 1);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let p = pairs();
        let board = dealt().handle_click(&p, "Poland").handle_click(&p, "Oslo");
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
