//! The core of Blocky, a game played on a recursively subdivided square board.
//!
//! Players take turns transforming blocks of the board (rotating, swapping,
//! smashing, painting or combining them) to reach their goal. Automated players
//! pick their moves with [`StrategicPlayer`] or [`random_move()`].

pub use action::*;
pub use block::*;
pub use colour::*;
pub use config::*;
pub use errors::*;
pub use goal::*;
pub use player_state::*;
pub use protocol_types::*;
pub use search::*;
pub use turn::*;

mod action;
#[cfg(test)]
mod arbitrary;
mod block;
mod colour;
mod config;
mod errors;
mod goal;
mod player_state;
mod protocol_types;
mod search;
mod turn;
