use serde::{Deserialize, Serialize};

use crate::{Block, Goal, InvalidLayout, Layout};

/// Request for a bot to do something.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to pick the next move.
    ///
    /// The response should be a [`Move`](crate::Move). Passing is always allowed.
    ChooseMove {
        board: BoardState,
        goal: Goal,
        /// The player's current score, including penalties.
        score: i64,
    },
    /// The bot should shut down.
    Bye,
}

/// A board as it is sent to bots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub size: u32,
    pub max_depth: u8,
    pub layout: Layout,
}

impl BoardState {
    pub fn from_block(board: &Block) -> Self {
        Self {
            size: board.size(),
            max_depth: board.max_depth(),
            layout: board.to_layout(),
        }
    }

    /// Rebuilds the board, with its upper left corner at the origin.
    pub fn to_block(&self) -> Result<Block, InvalidLayout> {
        Block::from_layout((0, 0), self.size, self.max_depth, &self.layout)
    }
}
