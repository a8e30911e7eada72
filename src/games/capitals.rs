//! The classic country-capital deployment.
//!
//! Ships the four-pair map the reference front end uses. The Warsaw entry
//! has its roles flipped (capital on the left); matching checks both
//! directions, so it plays the same as the rest.

use crate::core::{PairMap, PairMapError};
use crate::game::Game;

/// The stock four-entry pair map.
pub fn capital_pairs() -> Result<PairMap, PairMapError> {
    PairMap::from_entries([
        ("Warsaw", "Poland"),
        ("Netherlands", "Amsterdam"),
        ("Norway", "Oslo"),
        ("Ukraine", "Kyiv"),
    ])
}

/// A ready-to-play game over [`capital_pairs`], entropy seeded.
pub fn new_game() -> Game {
    Game::new(stock_pairs())
}

/// A ready-to-play game over [`capital_pairs`] with a fixed seed.
pub fn new_game_with_seed(seed: u64) -> Game {
    Game::with_seed(stock_pairs(), seed)
}

fn stock_pairs() -> PairMap {
    // The stock entries are statically known to pass validation.
    capital_pairs().expect("stock pair map is valid")
}
