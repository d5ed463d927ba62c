use crate::{Action, Colour};

/// The error type for [`Block::apply()`](crate::Block::apply), i.e. for an action whose
/// preconditions do not hold on the selected block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidAction {
    /// Rotating, swapping or combining requires a subdivided block.
    NotSubdivided,
    /// Smashing and painting require a leaf.
    NotALeaf,
    DepthLimitReached { level: u8, max_depth: u8 },
    /// Combining requires all four children to be leaves.
    ChildrenNotLeaves,
    AlreadyPainted { colour: Colour },
}

impl std::error::Error for InvalidAction {}

impl std::fmt::Display for InvalidAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidAction::NotSubdivided => write!(f, "The selected block has no children"),
            InvalidAction::NotALeaf => write!(f, "The selected block is subdivided, not a leaf"),
            InvalidAction::DepthLimitReached { level, max_depth } => write!(
                f,
                "The selected block is at level {}, it cannot be subdivided beyond the maximum depth {}",
                level, max_depth
            ),
            InvalidAction::ChildrenNotLeaves => {
                write!(f, "Not all children of the selected block are leaves")
            }
            InvalidAction::AlreadyPainted { colour } => {
                write!(f, "The selected block is already painted {}", colour)
            }
        }
    }
}

/// The error type for [`Block::find_node()`](crate::Block::find_node).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidSelection {
    LevelBeyondMaxDepth { level: u8, max_depth: u8 },
    /// The path ended before reaching the requested level or a leaf.
    PathTooShort { level: u8, path_len: usize },
}

impl std::error::Error for InvalidSelection {}

impl std::fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSelection::LevelBeyondMaxDepth { level, max_depth } => write!(
                f,
                "Selected level {} is deeper than the maximum depth {}",
                level, max_depth
            ),
            InvalidSelection::PathTooShort { level, path_len } => write!(
                f,
                "A path of {} quadrants does not reach level {}",
                path_len, level
            ),
        }
    }
}

/// The error type for building or parsing goals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidGoalConfiguration {
    UnknownGoalKind(String),
    UnknownColour(String),
    /// Goal strings have the form `<kind>:<colour>`.
    Malformed(String),
    TooManyGoals { requested: usize, available: usize },
}

impl std::error::Error for InvalidGoalConfiguration {}

impl std::fmt::Display for InvalidGoalConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidGoalConfiguration::UnknownGoalKind(kind) => {
                write!(f, "Unknown goal kind '{}', expected 'blob' or 'perimeter'", kind)
            }
            InvalidGoalConfiguration::UnknownColour(colour) => {
                write!(f, "'{}' is not a colour of the palette", colour)
            }
            InvalidGoalConfiguration::Malformed(s) => {
                write!(f, "Goal '{}' is not of the form <kind>:<colour>", s)
            }
            InvalidGoalConfiguration::TooManyGoals {
                requested,
                available,
            } => write!(
                f,
                "Requested {} goals, but there are only {} distinct colours",
                requested, available
            ),
        }
    }
}

/// The error type for [`Block::from_layout()`](crate::Block::from_layout).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidLayout {
    /// The board cannot be split into `2^max_depth` unit cells per side.
    IndivisibleSize { size: u32, max_depth: u8 },
    TooDeep { max_depth: u8 },
}

impl std::error::Error for InvalidLayout {}

impl std::fmt::Display for InvalidLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidLayout::IndivisibleSize { size, max_depth } => write!(
                f,
                "A board of size {} cannot be subdivided {} times",
                size, max_depth
            ),
            InvalidLayout::TooDeep { max_depth } => {
                write!(f, "The layout is subdivided deeper than the maximum depth {}", max_depth)
            }
        }
    }
}

#[derive(Debug)]
/// The error type for one turn.
pub enum IllegalMove {
    InvalidSelection(InvalidSelection),
    InvalidAction { action: Action, err: InvalidAction },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::InvalidSelection(err) => Some(err),
            IllegalMove::InvalidAction { err, .. } => Some(err),
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidSelection(_) => write!(f, "The move selected no block"),
            IllegalMove::InvalidAction { action, err: _ } => {
                write!(f, "Could not perform {} on the selected block", action)
            }
        }
    }
}

impl From<InvalidSelection> for IllegalMove {
    fn from(err: InvalidSelection) -> Self {
        IllegalMove::InvalidSelection(err)
    }
}
