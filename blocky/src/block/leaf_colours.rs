use std::iter::FusedIterator;

use crate::{Block, Colour};

/// Iterator produced by [`Block::leaf_colours()`].
///
/// Yields `(column, row, colour)` for every unit cell, with coordinates counted
/// in unit cells from the top-left corner of the block the iteration started at.
/// Leaves are visited in the order of [`Quadrant::ALL`](crate::Quadrant::ALL),
/// and the cells of a single leaf row by row.
#[derive(Clone, Debug)]
pub struct LeafColours<'a> {
    origin: (u32, u32),
    unit_size: u32,
    pending: Vec<&'a Block>,
    current: Option<LeafCells>,
}

#[derive(Clone, Copy, Debug)]
struct LeafCells {
    colour: Colour,
    column: usize,
    row: usize,
    side: usize,
    next: usize,
}

impl Block {
    /// The colour of every unit cell covered by this block.
    ///
    /// The traversal is lazy. It can be restarted by calling this method again,
    /// or by cloning the iterator.
    pub fn leaf_colours(&self) -> LeafColours<'_> {
        LeafColours {
            origin: self.position(),
            unit_size: self.unit_size(),
            pending: vec![self],
            current: None,
        }
    }
}

impl<'a> Iterator for LeafColours<'a> {
    type Item = (usize, usize, Colour);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cells) = &mut self.current {
                if cells.next < cells.side * cells.side {
                    let item = (
                        cells.column + cells.next % cells.side,
                        cells.row + cells.next / cells.side,
                        cells.colour,
                    );
                    cells.next += 1;
                    return Some(item);
                }
                self.current = None;
            }
            let block = self.pending.pop()?;
            match block.colour() {
                Some(colour) => {
                    let (x, y) = block.position();
                    self.current = Some(LeafCells {
                        colour,
                        column: ((x - self.origin.0) / self.unit_size) as usize,
                        row: ((y - self.origin.1) / self.unit_size) as usize,
                        side: block.cells_per_side(),
                        next: 0,
                    });
                }
                // Reversed, so that the upper left child is popped first
                None => self.pending.extend(block.children().iter().rev()),
            }
        }
    }
}

impl<'a> FusedIterator for LeafColours<'a> {}

/// The unit cells of a board as a square grid of colours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    // Row-major
    cells: Vec<Colour>,
}

impl Grid {
    /// Flattens the block into its unit cells.
    pub fn from_block(block: &Block) -> Self {
        let side = block.cells_per_side();
        // Every cell is overwritten, since the leaves cover the whole block.
        let mut cells = vec![Colour::Red; side * side];
        for (column, row, colour) in block.leaf_colours() {
            cells[row * side + column] = colour;
        }
        Self { side, cells }
    }

    /// Number of cells along one side.
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, column: usize, row: usize) -> Colour {
        debug_assert!(column < self.side && row < self.side);
        self.cells[row * self.side + column]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Colour] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ArbitraryBoard;
    use crate::layout;

    quickcheck! {
        fn one_colour_per_unit_cell(board: ArbitraryBoard) -> bool {
            let board = board.0;
            let side = board.cells_per_side();
            let mut seen = vec![false; side * side];
            for (column, row, _) in board.leaf_colours() {
                if seen[row * side + column] {
                    return false;
                }
                seen[row * side + column] = true;
            }
            seen.into_iter().all(|s| s)
        }
    }

    #[test]
    fn quadrant_order_and_repetition() {
        let board =
            Block::from_layout((0, 0), 4, 2, &layout!([red, [blue, blue, green, red], yellow, red]))
                .unwrap();
        let colours: Vec<Colour> = board.leaf_colours().map(|(_, _, c)| c).collect();
        use Colour::*;
        assert_eq!(
            colours,
            vec![
                Red, Red, Red, Red, // upper left leaf covers 4 cells
                Blue, Blue, Green, Red, //
                Yellow, Yellow, Yellow, Yellow, //
                Red, Red, Red, Red,
            ]
        );

        let grid = Grid::from_block(&board);
        assert_eq!(grid.side(), 4);
        assert_eq!(
            grid.cells(),
            &[
                Red, Red, Blue, Blue, //
                Red, Red, Green, Red, //
                Yellow, Yellow, Red, Red, //
                Yellow, Yellow, Red, Red,
            ]
        );
    }

    #[test]
    fn restartable() {
        let board = Block::new((8, 8), 8, 3, Colour::Green);
        let mut iter = board.leaf_colours();
        assert_eq!(iter.next(), Some((0, 0, Colour::Green)));
        let rest = iter.clone().count();
        assert_eq!(rest, 63);
        assert_eq!(iter.count(), 63);
        assert_eq!(board.leaf_colours().count(), 64);
    }
}
