use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::{Action, Block, Goal, Move};

/// Every legal move except passing.
///
/// Blocks are listed parents first and siblings in quadrant order (see
/// [`Block::nodes()`]), and for each block the actions in the order of
/// [`Action::candidates()`]. Legality is checked without touching the board.
pub fn candidate_moves(board: &Block) -> Vec<Move> {
    board
        .nodes()
        .into_iter()
        .flat_map(|(selector, node)| {
            Action::candidates()
                .filter(move |&action| node.check(action).is_ok())
                .map(move |action| Move::new(selector.clone(), action))
        })
        .collect()
}

/// A player that greedily picks the move with the best immediate score gain.
///
/// The search only looks one move ahead and ignores the other players.
/// Its result only depends on the board, the goal, the score and this struct,
/// so the same situation always leads to the same move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrategicPlayer {
    /// Seeds the colours of simulated smashes and the sampling of candidates.
    pub seed: u64,
    /// If set, only this many randomly sampled candidates are evaluated.
    pub difficulty: Option<usize>,
}

impl StrategicPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            difficulty: None,
        }
    }

    #[must_use]
    pub fn with_difficulty(self, difficulty: usize) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..self
        }
    }

    /// Returns the move that maximizes `score after - penalty - current_score`,
    /// where `current_score` is the goal's score on `board` before the move.
    ///
    /// Among equally good moves the one listed first by [`candidate_moves()`] wins.
    /// If no move has a positive gain, this passes.
    pub fn choose_move(&self, board: &Block, goal: &Goal, current_score: u32) -> Move {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut candidates = candidate_moves(board);
        if let Some(difficulty) = self.difficulty {
            if difficulty < candidates.len() {
                let mut picked = index::sample(&mut rng, candidates.len(), difficulty).into_vec();
                // Keep the enumeration order for breaking ties
                picked.sort_unstable();
                candidates = picked.into_iter().map(|idx| candidates[idx].clone()).collect();
            }
        }

        let mut best_move = Move::pass();
        let mut best_gain = 0;
        for mv in candidates {
            let Some((score, penalty)) = simulate(board, goal, &mv, &mut rng) else {
                continue;
            };
            let gain = i64::from(score) - i64::from(penalty) - i64::from(current_score);
            if gain > best_gain {
                debug!(gain, action = %mv.action, level = mv.selector.level, "New best move");
                best_gain = gain;
                best_move = mv;
            }
        }
        best_move
    }
}

/// Shorthand for [`StrategicPlayer::choose_move()`] with the default player.
pub fn choose_move(board: &Block, goal: &Goal, current_score: u32) -> Move {
    StrategicPlayer::default().choose_move(board, goal, current_score)
}

/// Plays the move on a copy of the board, returning the goal's new score and the penalty.
///
/// Only the blocks on the path to the selected block are copied.
fn simulate(board: &Block, goal: &Goal, mv: &Move, rng: &mut impl Rng) -> Option<(u32, u32)> {
    let mut copy = board.clone();
    let penalty = copy
        .find_node_mut(&mv.selector)
        .ok()?
        .apply(mv.action, rng)
        .ok()?;
    Some((goal.score(&copy), penalty))
}

/// A uniformly random legal move that is not a pass.
///
/// Only paints with the goal's colour, so painting never works against the goal.
/// Passes if there is no legal move at all.
pub fn random_move(board: &Block, goal: &Goal, rng: &mut impl Rng) -> Move {
    let candidates: Vec<Move> = candidate_moves(board)
        .into_iter()
        .filter(|mv| match mv.action {
            Action::Paint(colour) => colour == goal.colour,
            _ => true,
        })
        .collect();
    candidates.choose(rng).cloned().unwrap_or_else(Move::pass)
}
