mod layout;
mod leaf_colours;
mod quadrant;

use std::sync::Arc;

pub use layout::*;
pub use leaf_colours::*;
pub use quadrant::*;

use rand::Rng;

use crate::{Colour, InvalidSelection};

/// A square region of the board, which is either a solid leaf or split into
/// four equally sized children.
///
/// The root block owns the whole tree. Cloning a block is cheap: the clone shares
/// its children with the original until either of them is mutated, at which point
/// only the blocks on the path to the mutation are copied.
//
// Invariants:
// - children have half the size and one more level than their parent, and sit at the
//   offset given by their quadrant
// - `level <= max_depth`, and all blocks of one tree share the same `max_depth`
// - `size` is divisible by `2^(max_depth - level)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    position: (u32, u32),
    size: u32,
    level: u8,
    max_depth: u8,
    pub(crate) content: Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Content {
    Leaf(Colour),
    /// In the order of [`Quadrant::ALL`].
    Split(Arc<[Block; 4]>),
}

impl Block {
    /// Creates a board consisting of a single leaf.
    ///
    /// Panics if `size` cannot be split into `2^max_depth` unit cells per side.
    pub fn new(position: (u32, u32), size: u32, max_depth: u8, colour: Colour) -> Self {
        assert_board_geometry(size, max_depth);
        Self {
            position,
            size,
            level: 0,
            max_depth,
            content: Content::Leaf(colour),
        }
    }

    /// Generates a random board.
    ///
    /// Every block above `max_depth` is subdivided with probability
    /// `split_probability`, otherwise it becomes a leaf of a random colour.
    ///
    /// Panics if the geometry is invalid (see [`Block::new()`]) or if
    /// `split_probability` is not within `0.0..=1.0`.
    ///
    /// ```
    /// # use blocky::Block;
    /// # use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let board = Block::build((0, 0), 64, 3, 0.5, &mut rng);
    /// assert_eq!(board.leaf_colours().count(), 64);
    /// ```
    pub fn build(
        position: (u32, u32),
        size: u32,
        max_depth: u8,
        split_probability: f64,
        rng: &mut impl Rng,
    ) -> Self {
        assert!((0.0..=1.0).contains(&split_probability));
        let mut root = Self::new(position, size, max_depth, Colour::random(rng));
        root.grow(split_probability, rng);
        root
    }

    fn grow(&mut self, split_probability: f64, rng: &mut impl Rng) {
        if self.level < self.max_depth && rng.gen_bool(split_probability) {
            let mut children = self.leaf_children(|_| Colour::random(rng));
            for child in children.iter_mut() {
                child.grow(split_probability, rng);
            }
            self.content = Content::Split(Arc::new(children));
        }
    }

    /// Top-left corner, in board units.
    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    /// Side length, in board units.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the root, which is at level 0.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// The colour of a leaf, or `None` if the block is subdivided.
    pub fn colour(&self) -> Option<Colour> {
        match self.content {
            Content::Leaf(colour) => Some(colour),
            Content::Split(_) => None,
        }
    }

    /// Either empty or exactly four children, in the order of [`Quadrant::ALL`].
    pub fn children(&self) -> &[Block] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Split(children) => &children[..],
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Block> {
        self.children().get(quadrant.index())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    /// The level of the deepest leaf in this subtree.
    pub fn depth(&self) -> u8 {
        self.children()
            .iter()
            .map(Block::depth)
            .max()
            .unwrap_or(self.level)
    }

    /// Number of unit cells along one side of this block.
    pub fn cells_per_side(&self) -> usize {
        1 << (self.max_depth - self.level)
    }

    /// Side length of a unit cell, in board units.
    pub fn unit_size(&self) -> u32 {
        self.size >> (self.max_depth - self.level)
    }

    /// Is the board point inside this block?
    ///
    /// The top and left edges belong to the block, the bottom and right edges don't.
    pub fn contains(&self, (x, y): (u32, u32)) -> bool {
        let (left, top) = self.position;
        left <= x && x < left + self.size && top <= y && y < top + self.size
    }

    /// Returns the block at `selector.level` along `selector.path`.
    ///
    /// If the path passes through a leaf above that level, the leaf is returned.
    pub fn find_node(&self, selector: &Selector) -> Result<&Block, InvalidSelection> {
        if selector.level > self.max_depth {
            return Err(InvalidSelection::LevelBeyondMaxDepth {
                level: selector.level,
                max_depth: self.max_depth,
            });
        }
        let mut node = self;
        let mut path = selector.path.iter();
        while node.level < selector.level && !node.is_leaf() {
            let quadrant = path.next().ok_or(InvalidSelection::PathTooShort {
                level: selector.level,
                path_len: selector.path.len(),
            })?;
            node = &node.children()[quadrant.index()];
        }
        Ok(node)
    }

    /// Like [`Self::find_node()`], but the block can be mutated.
    ///
    /// Children shared with clones of this tree are copied along the way.
    pub fn find_node_mut(&mut self, selector: &Selector) -> Result<&mut Block, InvalidSelection> {
        // Validate first, so that a failed selection copies nothing.
        self.find_node(selector)?;
        let mut node = self;
        for &quadrant in &selector.path {
            if node.level >= selector.level || node.is_leaf() {
                break;
            }
            node = &mut node.children_mut()[quadrant.index()];
        }
        Ok(node)
    }

    /// The selector for the block at `level` that contains the board point `location`.
    ///
    /// If the deepest block containing the point is above `level`, that block is
    /// selected instead. Levels beyond the maximum depth are clamped. Returns `None`
    /// if the point is outside of this block.
    pub fn selector_at(&self, location: (u32, u32), level: u8) -> Option<Selector> {
        if !self.contains(location) {
            return None;
        }
        let level = level.min(self.max_depth);
        let mut selector = Selector::root();
        let mut node = self;
        while node.level < level {
            let Some(quadrant) = node.quadrant_containing(location) else {
                break;
            };
            selector.path.push(quadrant);
            node = &node.children()[quadrant.index()];
        }
        selector.level = node.level;
        Some(selector)
    }

    /// The block at `level` that contains the board point `location`.
    ///
    /// See [`Self::selector_at()`].
    pub fn block_at(&self, location: (u32, u32), level: u8) -> Option<&Block> {
        let selector = self.selector_at(location, level)?;
        self.find_node(&selector).ok()
    }

    fn quadrant_containing(&self, location: (u32, u32)) -> Option<Quadrant> {
        self.children()
            .iter()
            .zip(Quadrant::ALL)
            .find(|(child, _)| child.contains(location))
            .map(|(_, quadrant)| quadrant)
    }

    /// Every block of this subtree with its selector, parents before their children
    /// and siblings in the order of [`Quadrant::ALL`].
    pub fn nodes(&self) -> Vec<(Selector, &Block)> {
        let mut nodes = Vec::new();
        self.collect_nodes(Selector::root(), &mut nodes);
        nodes
    }

    fn collect_nodes<'a>(&'a self, selector: Selector, nodes: &mut Vec<(Selector, &'a Block)>) {
        nodes.push((selector.clone(), self));
        for (child, quadrant) in self.children().iter().zip(Quadrant::ALL) {
            child.collect_nodes(selector.child(quadrant), nodes);
        }
    }

    /// Position and size of the child in `quadrant`.
    pub(crate) fn child_geometry(&self, quadrant: Quadrant) -> ((u32, u32), u32) {
        let half = self.size / 2;
        let (dx, dy) = quadrant.offset(half);
        ((self.position.0 + dx, self.position.1 + dy), half)
    }

    /// Four leaves that would exactly cover this block.
    pub(crate) fn leaf_children(&self, mut colour_for: impl FnMut(Quadrant) -> Colour) -> [Block; 4] {
        Quadrant::ALL.map(|quadrant| {
            let (position, size) = self.child_geometry(quadrant);
            Block {
                position,
                size,
                level: self.level + 1,
                max_depth: self.max_depth,
                content: Content::Leaf(colour_for(quadrant)),
            }
        })
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Block] {
        match &mut self.content {
            Content::Leaf(_) => &mut [],
            Content::Split(children) => &mut Arc::make_mut(children)[..],
        }
    }

    /// Moves the subtree so that this block's top-left corner is at `position`.
    pub(crate) fn move_to(&mut self, position: (u32, u32)) {
        if self.position == position {
            return;
        }
        self.position = position;
        self.reposition_children();
    }

    /// Moves every child to the position that matches its slot.
    pub(crate) fn reposition_children(&mut self) {
        let positions = Quadrant::ALL.map(|quadrant| self.child_geometry(quadrant).0);
        if self
            .children()
            .iter()
            .zip(positions)
            .all(|(child, position)| child.position == position)
        {
            return;
        }
        for (child, position) in self.children_mut().iter_mut().zip(positions) {
            child.move_to(position);
        }
    }
}

#[cfg(test)]
impl Block {
    /// Checks every invariant of this subtree.
    pub(crate) fn is_well_formed(&self) -> bool {
        if self.level > self.max_depth {
            return false;
        }
        match &self.content {
            Content::Leaf(_) => true,
            Content::Split(children) => children.iter().zip(Quadrant::ALL).all(|(child, quadrant)| {
                let (position, size) = self.child_geometry(quadrant);
                child.position == position
                    && child.size == size
                    && child.level == self.level + 1
                    && child.max_depth == self.max_depth
                    && child.is_well_formed()
            }),
        }
    }
}

fn assert_board_geometry(size: u32, max_depth: u8) {
    assert!(
        valid_geometry(size, max_depth),
        "size {} cannot be split into 2^{} unit cells",
        size,
        max_depth
    );
}

/// Can a board of `size` be split into `2^max_depth` unit cells per side?
pub(crate) fn valid_geometry(size: u32, max_depth: u8) -> bool {
    max_depth < 32 && size > 0 && size % (1 << max_depth) == 0
}
