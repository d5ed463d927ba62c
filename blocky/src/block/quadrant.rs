use serde::{Deserialize, Serialize};

/// The position of a child within its parent.
///
/// Children are always stored in the order of [`Quadrant::ALL`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// Index of this quadrant in a children array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Offset of this quadrant from the parent's top-left corner, for a child of size `half`.
    pub fn offset(self, half: u32) -> (u32, u32) {
        match self {
            Quadrant::UpperLeft => (0, 0),
            Quadrant::UpperRight => (half, 0),
            Quadrant::LowerLeft => (0, half),
            Quadrant::LowerRight => (half, half),
        }
    }
}

/// Addresses a block by descending from the root.
///
/// `path` lists the quadrant to enter at each level, starting at the root.
/// Entries beyond `level` are ignored, and the descent also stops early
/// at a leaf, so a selector never reaches deeper than the tree actually is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    pub level: u8,
    pub path: Vec<Quadrant>,
}

impl Selector {
    /// Selects the root block.
    pub fn root() -> Self {
        Self {
            level: 0,
            path: Vec::new(),
        }
    }

    /// Selects the given child of the block selected by `self`.
    #[must_use]
    pub fn child(&self, quadrant: Quadrant) -> Self {
        let mut path = self.path.clone();
        path.push(quadrant);
        Self {
            level: self.level + 1,
            path,
        }
    }
}
