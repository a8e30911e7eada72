//! # pairmatch
//!
//! A matching game engine: a player pairs countries with their capitals
//! by selecting two buttons in sequence.
//!
//! ## Design Principles
//!
//! 1. **Deployment-Agnostic**: No hardcoded labels. Embedding apps provide
//!    a validated [`PairMap`] at startup.
//!
//! 2. **Whole-Board Replacement**: Every click produces a new [`Board`];
//!    callers never observe partial mutation. The board is a persistent
//!    `im` vector, so replacement is cheap.
//!
//! 3. **Deterministic When Asked**: Shuffles go through [`GameRng`].
//!    Production seeds from entropy; tests inject a fixed seed and get a
//!    reproducible deal.
//!
//! ## Architecture
//!
//! - The engine is a total transition function over the board: click in,
//!   board out. No error channel, no I/O, no concurrency.
//! - Front ends consume the rendering contract in [`render`]: a
//!   [`BoardView`] per update plus the fixed state → color table.
//!
//! ## Modules
//!
//! - `core`: pair map, options, board transition function, RNG
//! - `game`: owning session with the `on_option_clicked`/`on_reset` surface
//! - `render`: rendering contract for front ends
//! - `games`: stock deployments (the classic capitals map)

pub mod core;
pub mod game;
pub mod games;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardOption, GameRng, GameRngState, OptionState, PairMap, PairMapError,
};

pub use crate::game::Game;

pub use crate::render::{button_color, BoardView, ButtonColor, ButtonView};
