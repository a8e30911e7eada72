//! Core engine types: pair map, options, board, RNG.
//!
//! Everything here is deployment-agnostic: the engine never hardcodes
//! which labels exist. Embedding applications provide a validated
//! [`PairMap`] and the engine does the rest.

pub mod board;
pub mod option;
pub mod pairs;
pub mod rng;

pub use board::Board;
pub use option::{BoardOption, OptionState};
pub use pairs::{PairMap, PairMapError};
pub use rng::{GameRng, GameRngState};
