use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{valid_geometry, Content};
use crate::{Block, Colour, InvalidLayout, Quadrant};

/// The shape and colours of a board, without its geometry.
///
/// In JSON, a leaf is its colour name and a subdivided block is an array with the
/// layouts of its four children, e.g. `["red", "blue", ["red", "red", "green", "red"], "yellow"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Layout {
    Leaf(Colour),
    /// In the order of [`Quadrant::ALL`].
    Split(Box<[Layout; 4]>),
}

impl Block {
    /// Builds a board with a fixed layout.
    ///
    /// ```
    /// # use blocky::{layout, Block, Colour, Quadrant};
    /// let board = Block::from_layout((0, 0), 8, 1, &layout!([red, blue, green, yellow])).unwrap();
    /// let lower_left = board.child(Quadrant::LowerLeft).unwrap();
    /// assert_eq!(lower_left.position(), (0, 4));
    /// assert_eq!(lower_left.colour(), Some(Colour::Green));
    /// ```
    pub fn from_layout(
        position: (u32, u32),
        size: u32,
        max_depth: u8,
        layout: &Layout,
    ) -> Result<Self, InvalidLayout> {
        if !valid_geometry(size, max_depth) {
            return Err(InvalidLayout::IndivisibleSize { size, max_depth });
        }
        let mut root = Block::new(position, size, max_depth, Colour::Red);
        root.fill(layout)?;
        Ok(root)
    }

    fn fill(&mut self, layout: &Layout) -> Result<(), InvalidLayout> {
        match layout {
            Layout::Leaf(colour) => self.content = Content::Leaf(*colour),
            Layout::Split(child_layouts) => {
                if self.level() >= self.max_depth() {
                    return Err(InvalidLayout::TooDeep {
                        max_depth: self.max_depth(),
                    });
                }
                let mut children = self.leaf_children(|_| Colour::Red);
                for (child, quadrant) in children.iter_mut().zip(Quadrant::ALL) {
                    child.fill(&child_layouts[quadrant.index()])?;
                }
                self.content = Content::Split(Arc::new(children));
            }
        }
        Ok(())
    }

    /// The layout of this subtree.
    pub fn to_layout(&self) -> Layout {
        match &self.content {
            Content::Leaf(colour) => Layout::Leaf(*colour),
            Content::Split(children) => Layout::Split(Box::new(
                Quadrant::ALL.map(|quadrant| children[quadrant.index()].to_layout()),
            )),
        }
    }
}

/// Shorthand for writing [`Layout`]s.
///
/// A leaf is written as its lowercase colour name, a subdivided block as a
/// bracketed list of four layouts.
/// ```
/// # use blocky::{layout, Colour, Layout};
/// assert_eq!(layout!(red), Layout::Leaf(Colour::Red));
/// let nested = layout!([red, [blue, blue, green, red], yellow, red]);
/// assert!(matches!(nested, Layout::Split(_)));
/// ```
#[macro_export]
macro_rules! layout {
    ([$ul:tt, $ur:tt, $ll:tt, $lr:tt]) => {
        $crate::Layout::Split(Box::new([
            $crate::layout!($ul),
            $crate::layout!($ur),
            $crate::layout!($ll),
            $crate::layout!($lr),
        ]))
    };
    ($colour:ident) => {
        $crate::Layout::Leaf(
            <$crate::Colour as std::str::FromStr>::from_str(stringify!($colour))
                .expect("Invalid colour given to layout! macro"),
        )
    };
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ArbitraryBoard;

    quickcheck! {
        fn layout_reproduces_board(board: ArbitraryBoard) -> bool {
            let board = board.0;
            let rebuilt = Block::from_layout(
                board.position(),
                board.size(),
                board.max_depth(),
                &board.to_layout(),
            );
            rebuilt == Ok(board)
        }
    }

    #[test]
    fn too_deep() {
        let layout = layout!([red, [blue, blue, green, red], yellow, red]);
        assert_eq!(
            Block::from_layout((0, 0), 8, 1, &layout),
            Err(InvalidLayout::TooDeep { max_depth: 1 })
        );
        assert_eq!(
            Block::from_layout((0, 0), 6, 2, &layout),
            Err(InvalidLayout::IndivisibleSize {
                size: 6,
                max_depth: 2
            })
        );
    }

    #[test]
    fn json_representation() {
        let layout = layout!([red, [blue, blue, green, red], yellow, red]);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"["red",["blue","blue","green","red"],"yellow","red"]"#);
        assert_eq!(serde_json::from_str::<Layout>(&json).unwrap(), layout);
        assert!(serde_json::from_str::<Layout>(r#"["red","blue"]"#).is_err());
    }
}
