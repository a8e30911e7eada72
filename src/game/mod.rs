//! Game session: the embedding surface.
//!
//! A [`Game`] owns the pair map, the current board, and the RNG, and
//! exposes exactly the operations a front end wires to its UI:
//! `on_option_clicked` for button presses and `on_reset` for the
//! try-again control, plus read access for rendering.
//!
//! Each click is handled to completion before the next is accepted; the
//! session is single threaded and every update replaces the board
//! wholesale.

use crate::core::{Board, GameRng, PairMap};
use crate::render::BoardView;

/// One running game: pair map + board + RNG.
///
/// ## Example
///
/// ```
/// use pairmatch::core::PairMap;
/// use pairmatch::game::Game;
///
/// let pairs = PairMap::from_entries([("Poland", "Warsaw")]).unwrap();
/// let mut game = Game::with_seed(pairs, 42);
///
/// game.on_option_clicked("Poland");
/// game.on_option_clicked("Warsaw");
/// assert!(game.is_won());
///
/// game.on_reset();
/// assert_eq!(game.board().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pairs: PairMap,
    board: Board,
    rng: GameRng,
}

impl Game {
    /// Start a game with an entropy-seeded shuffle.
    #[must_use]
    pub fn new(pairs: PairMap) -> Self {
        Self::with_rng(pairs, GameRng::from_entropy())
    }

    /// Start a game with a fixed seed. Same seed, same deal.
    #[must_use]
    pub fn with_seed(pairs: PairMap, seed: u64) -> Self {
        Self::with_rng(pairs, GameRng::new(seed))
    }

    /// Start a game with a caller-provided RNG.
    #[must_use]
    pub fn with_rng(pairs: PairMap, mut rng: GameRng) -> Self {
        let board = Board::deal(&pairs, &mut rng);
        Self { pairs, board, rng }
    }

    /// The immutable pair map this game was created with.
    #[must_use]
    pub fn pairs(&self) -> &PairMap {
        &self.pairs
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Win condition: the board has been cleared.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Render snapshot of the current board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::of(&self.board)
    }

    /// Handle a click on the option with the given label.
    pub fn on_option_clicked(&mut self, label: &str) {
        self.board = self.board.handle_click(&self.pairs, label);
    }

    /// Discard all progress and deal a fresh shuffled board.
    pub fn on_reset(&mut self) {
        self.board = Board::deal(&self.pairs, &mut self.rng);
    }
}
