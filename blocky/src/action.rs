use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::block::Content;
use crate::{Block, Colour, InvalidAction, COLOUR_LIST};

pub const SMASH_PENALTY: u32 = 3;
pub const PAINT_PENALTY: u32 = 1;
pub const COMBINE_PENALTY: u32 = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapAxis {
    /// Exchanges the left and the right half.
    Horizontal,
    /// Exchanges the top and the bottom half.
    Vertical,
}

/// Something a player can do to a selected block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Rotate(Rotation),
    Swap(SwapAxis),
    Smash,
    Paint(Colour),
    Combine,
    Pass,
}

impl Action {
    /// Every action except [`Action::Pass`], in the order in which automated players
    /// consider them.
    pub fn candidates() -> impl Iterator<Item = Action> {
        [
            Action::Rotate(Rotation::Clockwise),
            Action::Rotate(Rotation::CounterClockwise),
            Action::Swap(SwapAxis::Horizontal),
            Action::Swap(SwapAxis::Vertical),
            Action::Smash,
            Action::Combine,
        ]
        .into_iter()
        .chain(COLOUR_LIST.into_iter().map(Action::Paint))
    }

    /// The amount deducted from the acting player's score.
    pub fn penalty(self) -> u32 {
        match self {
            Action::Smash => SMASH_PENALTY,
            Action::Paint(_) => PAINT_PENALTY,
            Action::Combine => COMBINE_PENALTY,
            Action::Rotate(_) | Action::Swap(_) | Action::Pass => 0,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Rotate(Rotation::Clockwise) => write!(f, "rotate clockwise"),
            Action::Rotate(Rotation::CounterClockwise) => write!(f, "rotate counter-clockwise"),
            Action::Swap(SwapAxis::Horizontal) => write!(f, "swap horizontally"),
            Action::Swap(SwapAxis::Vertical) => write!(f, "swap vertically"),
            Action::Smash => write!(f, "smash"),
            Action::Paint(colour) => write!(f, "paint {}", colour),
            Action::Combine => write!(f, "combine"),
            Action::Pass => write!(f, "pass"),
        }
    }
}

impl Block {
    /// Checks whether `action` can be applied to this block, without applying it.
    pub fn check(&self, action: Action) -> Result<(), InvalidAction> {
        match (action, &self.content) {
            (Action::Rotate(_) | Action::Swap(_), Content::Leaf(_)) => {
                Err(InvalidAction::NotSubdivided)
            }
            (Action::Rotate(_) | Action::Swap(_), Content::Split(_)) => Ok(()),
            (Action::Smash, Content::Split(_)) => Err(InvalidAction::NotALeaf),
            (Action::Smash, Content::Leaf(_)) if self.level() >= self.max_depth() => {
                Err(InvalidAction::DepthLimitReached {
                    level: self.level(),
                    max_depth: self.max_depth(),
                })
            }
            (Action::Smash, Content::Leaf(_)) => Ok(()),
            (Action::Paint(_), Content::Split(_)) => Err(InvalidAction::NotALeaf),
            (Action::Paint(colour), &Content::Leaf(current)) if colour == current => {
                Err(InvalidAction::AlreadyPainted { colour })
            }
            (Action::Paint(_), Content::Leaf(_)) => Ok(()),
            (Action::Combine, Content::Leaf(_)) => Err(InvalidAction::NotSubdivided),
            (Action::Combine, Content::Split(children)) => {
                if children.iter().all(Block::is_leaf) {
                    Ok(())
                } else {
                    Err(InvalidAction::ChildrenNotLeaves)
                }
            }
            (Action::Pass, _) => Ok(()),
        }
    }

    /// Applies `action` to this block and returns its penalty.
    ///
    /// The block's own position, size and level never change. On error, the block
    /// is left untouched. The RNG is only used for the colours of smashed blocks.
    pub fn apply(&mut self, action: Action, rng: &mut impl Rng) -> Result<u32, InvalidAction> {
        self.check(action)?;
        match action {
            // Slots are (upper left, upper right, lower left, lower right)
            Action::Rotate(Rotation::Clockwise) => self.rearrange(|[ul, ur, ll, lr]| [ll, ul, lr, ur]),
            Action::Rotate(Rotation::CounterClockwise) => {
                self.rearrange(|[ul, ur, ll, lr]| [ur, lr, ul, ll])
            }
            Action::Swap(SwapAxis::Horizontal) => self.rearrange(|[ul, ur, ll, lr]| [ur, ul, lr, ll]),
            Action::Swap(SwapAxis::Vertical) => self.rearrange(|[ul, ur, ll, lr]| [ll, lr, ul, ur]),
            Action::Smash => {
                let children = self.leaf_children(|_| Colour::random(rng));
                self.content = Content::Split(Arc::new(children));
            }
            Action::Paint(colour) => self.content = Content::Leaf(colour),
            Action::Combine => {
                let colour = plurality_colour(self.children().iter().filter_map(Block::colour));
                self.content = Content::Leaf(colour);
            }
            Action::Pass => {}
        }
        trace!(%action, level = self.level(), position = ?self.position(), "Applied action");
        Ok(action.penalty())
    }

    /// Moves the children into new slots, then corrects their positions.
    fn rearrange(&mut self, f: impl FnOnce([Block; 4]) -> [Block; 4]) {
        if let Content::Split(children) = &mut self.content {
            // Cloning only copies the children themselves, their subtrees are shared.
            *children = Arc::new(f((**children).clone()));
        }
        self.reposition_children();
    }
}

/// The most frequent colour. Ties go to the colour that comes first in [`COLOUR_LIST`].
pub fn plurality_colour(colours: impl IntoIterator<Item = Colour>) -> Colour {
    let mut counts = [0usize; COLOUR_LIST.len()];
    for colour in colours {
        counts[colour.to_index()] += 1;
    }
    let mut best = COLOUR_LIST[0];
    for colour in COLOUR_LIST {
        if counts[colour.to_index()] > counts[best.to_index()] {
            best = colour;
        }
    }
    best
}
