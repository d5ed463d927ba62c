use quickcheck::{Arbitrary, Gen};

use crate::{Action, Block, Colour, Layout, Quadrant, Rotation, Selector, SwapAxis, COLOUR_LIST};

/// A board with between 0 and 4 levels of subdivision below the root.
#[derive(Clone, Debug)]
pub struct ArbitraryBoard(pub Block);

/// A selector and an action, neither of which needs to be valid.
#[derive(Clone, Debug)]
pub struct ArbitraryMove(pub Selector, pub Action);

impl Arbitrary for Colour {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&COLOUR_LIST).unwrap()
    }
}

impl Arbitrary for Quadrant {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Quadrant::ALL).unwrap()
    }
}

impl Arbitrary for Action {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 8 {
            0 => Action::Rotate(Rotation::Clockwise),
            1 => Action::Rotate(Rotation::CounterClockwise),
            2 => Action::Swap(SwapAxis::Horizontal),
            3 => Action::Swap(SwapAxis::Vertical),
            4 => Action::Smash,
            5 => Action::Paint(Colour::arbitrary(g)),
            6 => Action::Combine,
            _ => Action::Pass,
        }
    }
}

fn arbitrary_layout(g: &mut Gen, levels_left: u8) -> Layout {
    if levels_left > 0 && u8::arbitrary(g) % 3 != 0 {
        Layout::Split(Box::new([(); 4].map(|_| arbitrary_layout(g, levels_left - 1))))
    } else {
        Layout::Leaf(Colour::arbitrary(g))
    }
}

impl Arbitrary for ArbitraryBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let max_depth = u8::arbitrary(g) % 5;
        let layout = arbitrary_layout(g, max_depth);
        ArbitraryBoard(Block::from_layout((0, 0), 64, max_depth, &layout).unwrap())
    }
}

impl Arbitrary for ArbitraryMove {
    fn arbitrary(g: &mut Gen) -> Self {
        // Levels up to 5 also exercise selections beyond the maximum depth
        let level = u8::arbitrary(g) % 6;
        let path = (0..5).map(|_| Quadrant::arbitrary(g)).collect();
        ArbitraryMove(Selector { level, path }, Action::arbitrary(g))
    }
}
