use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Action, Block, IllegalMove, PlayerState, Selector};

/// An action together with the block it applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub selector: Selector,
    pub action: Action,
}

impl Move {
    pub fn new(selector: Selector, action: Action) -> Self {
        Self { selector, action }
    }

    pub fn pass() -> Self {
        Self::new(Selector::root(), Action::Pass)
    }

    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }
}

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Passed { score: i64 },
    Normal { penalty: u32, score: i64 },
}

/// Plays one turn for `state`: applies the move to the board, then charges the
/// penalty and updates the player's score.
///
/// On error, neither the board nor the player state are changed. Passing never fails,
/// whatever the selector.
pub fn execute_turn(
    state: &mut PlayerState,
    board: &mut Block,
    mv: &Move,
    rng: &mut impl Rng,
) -> Result<TurnOutcome, IllegalMove> {
    if mv.is_pass() {
        state.record_turn(board, 0);
        return Ok(TurnOutcome::Passed {
            score: state.current_score,
        });
    }
    let node = board.find_node_mut(&mv.selector)?;
    let penalty = node
        .apply(mv.action, rng)
        .map_err(|err| IllegalMove::InvalidAction {
            action: mv.action,
            err,
        })?;
    state.record_turn(board, penalty);
    Ok(TurnOutcome::Normal {
        penalty,
        score: state.current_score,
    })
}
