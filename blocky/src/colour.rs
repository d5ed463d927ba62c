use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A colour from the fixed palette that leaf blocks are painted with.
///
/// The declaration order is significant: it is the order in which
/// [`COLOUR_LIST`] lists the colours, and it breaks ties whenever two
/// colours are equally good (e.g. when combining blocks).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Colour {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Every colour of the palette, in declaration order.
pub static COLOUR_LIST: [Colour; 4] = [Colour::Red, Colour::Blue, Colour::Green, Colour::Yellow];

impl Colour {
    /// The RGB triple used by renderers.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::Red => (199, 44, 58),
            Colour::Blue => (1, 128, 181),
            Colour::Green => (138, 151, 71),
            Colour::Yellow => (255, 211, 92),
        }
    }

    /// Human-readable name, as used in goal descriptions.
    pub fn name(self) -> &'static str {
        match self {
            Colour::Red => "Real Red",
            Colour::Blue => "Pacific Point",
            Colour::Green => "Old Olive",
            Colour::Yellow => "Daffodil Delight",
        }
    }

    /// Position in [`COLOUR_LIST`].
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Picks a colour uniformly from the palette.
    pub fn random(rng: &mut impl Rng) -> Self {
        COLOUR_LIST[rng.gen_range(0..COLOUR_LIST.len())]
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`] instance of [`Colour`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownColour(pub String);

impl std::error::Error for UnknownColour {}

impl std::fmt::Display for UnknownColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a colour of the palette", self.0)
    }
}

impl FromStr for Colour {
    type Err = UnknownColour;

    /// Parses the lowercase colour name, i.e. the same spelling that serde uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Colour::Red),
            "blue" => Ok(Colour::Blue),
            "green" => Ok(Colour::Green),
            "yellow" => Ok(Colour::Yellow),
            _ => Err(UnknownColour(String::from(s))),
        }
    }
}
