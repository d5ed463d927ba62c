use serde::{Deserialize, Serialize};

use crate::{Block, Goal};

/// Who decides on a player's moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    Strategic,
}

/// The state for a single player during one game.
#[derive(Clone, Debug)]
pub struct PlayerState {
    pub id: usize,
    pub goal: Goal,
    pub kind: PlayerKind,
    /// Sum of the penalties of all actions this player performed.
    pub penalty: u32,
    /// The goal's score on the board minus `penalty`. May be negative.
    pub current_score: i64,
}

impl PlayerState {
    pub fn new(id: usize, goal: Goal, kind: PlayerKind) -> Self {
        Self {
            id,
            goal,
            kind,
            penalty: 0,
            current_score: 0,
        }
    }

    /// Re-scores the goal on `board`, after adding `penalty` to the accumulated penalty.
    pub fn record_turn(&mut self, board: &Block, penalty: u32) {
        self.penalty += penalty;
        self.current_score = i64::from(self.goal.score(board)) - i64::from(self.penalty);
    }
}
