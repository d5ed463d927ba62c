use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Block, Colour, Grid, InvalidGoalConfiguration, COLOUR_LIST};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Build the largest connected area of the target colour.
    Blob,
    /// Cover as much of the board's border as possible with the target colour.
    Perimeter,
}

/// A player's objective for the whole game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    pub kind: GoalKind,
    pub colour: Colour,
}

impl Goal {
    pub fn new(kind: GoalKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    /// The current score of this goal on `board`. Never negative.
    ///
    /// ```
    /// # use blocky::{Block, Colour, Goal, GoalKind};
    /// let board = Block::new((0, 0), 4, 2, Colour::Red);
    /// assert_eq!(Goal::new(GoalKind::Perimeter, Colour::Red).score(&board), 16);
    /// assert_eq!(Goal::new(GoalKind::Blob, Colour::Red).score(&board), 16);
    /// assert_eq!(Goal::new(GoalKind::Blob, Colour::Blue).score(&board), 0);
    /// ```
    pub fn score(&self, board: &Block) -> u32 {
        self.score_grid(&Grid::from_block(board))
    }

    /// Like [`Self::score()`], for an already flattened board.
    pub fn score_grid(&self, grid: &Grid) -> u32 {
        match self.kind {
            GoalKind::Blob => largest_blob(grid, self.colour),
            GoalKind::Perimeter => perimeter_cells(grid, self.colour),
        }
    }

    pub fn description(&self) -> String {
        match self.kind {
            GoalKind::Blob => format!(
                "Goal: Create the largest blob of {} anywhere within this block.",
                self.colour
            ),
            GoalKind::Perimeter => format!(
                "Goal: Maximize the presence of {} on the perimeter of the board",
                self.colour
            ),
        }
    }
}

/// Number of border cells of the target colour. Corner cells lie on two edges and count twice.
fn perimeter_cells(grid: &Grid, colour: Colour) -> u32 {
    let last = grid.side() - 1;
    let mut score = 0;
    for i in 0..grid.side() {
        for (column, row) in [(i, 0), (i, last), (0, i), (last, i)] {
            if grid.get(column, row) == colour {
                score += 1;
            }
        }
    }
    score
}

/// Size of the largest 4-connected area of the target colour.
fn largest_blob(grid: &Grid, colour: Colour) -> u32 {
    let side = grid.side();
    let mut visited = vec![false; side * side];
    let mut stack = Vec::new();
    let mut largest = 0;

    for start in 0..side * side {
        if visited[start] || grid.cells()[start] != colour {
            continue;
        }
        // Flood fill, marking cells when they are pushed so each is visited once.
        let mut size = 0;
        visited[start] = true;
        stack.push(start);
        while let Some(idx) = stack.pop() {
            size += 1;
            let (column, row) = (idx % side, idx / side);
            let neighbours = [
                (column > 0).then(|| idx - 1),
                (column + 1 < side).then(|| idx + 1),
                (row > 0).then(|| idx - side),
                (row + 1 < side).then(|| idx + side),
            ];
            for neighbour in neighbours.into_iter().flatten() {
                if !visited[neighbour] && grid.cells()[neighbour] == colour {
                    visited[neighbour] = true;
                    stack.push(neighbour);
                }
            }
        }
        largest = largest.max(size);
    }
    largest
}

/// Randomly generates `num_goals` goals with pairwise distinct colours.
pub fn generate_goals(
    num_goals: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Goal>, InvalidGoalConfiguration> {
    if num_goals > COLOUR_LIST.len() {
        return Err(InvalidGoalConfiguration::TooManyGoals {
            requested: num_goals,
            available: COLOUR_LIST.len(),
        });
    }
    let mut colours = COLOUR_LIST;
    colours.shuffle(rng);
    Ok(colours[..num_goals]
        .iter()
        .map(|&colour| {
            let kind = if rng.gen::<bool>() {
                GoalKind::Blob
            } else {
                GoalKind::Perimeter
            };
            Goal::new(kind, colour)
        })
        .collect())
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalKind::Blob => write!(f, "blob"),
            GoalKind::Perimeter => write!(f, "perimeter"),
        }
    }
}

impl FromStr for GoalKind {
    type Err = InvalidGoalConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(GoalKind::Blob),
            "perimeter" => Ok(GoalKind::Perimeter),
            _ => Err(InvalidGoalConfiguration::UnknownGoalKind(String::from(s))),
        }
    }
}

/// Formats as `<kind>:<colour>`, which [`FromStr`] parses back.
impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colour = format!("{:?}", self.colour).to_lowercase();
        write!(f, "{}:{}", self.kind, colour)
    }
}

impl FromStr for Goal {
    type Err = InvalidGoalConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, colour) = s
            .split_once(':')
            .ok_or_else(|| InvalidGoalConfiguration::Malformed(String::from(s)))?;
        let kind = kind.parse::<GoalKind>()?;
        let colour = colour
            .parse::<Colour>()
            .map_err(|err| InvalidGoalConfiguration::UnknownColour(err.0))?;
        Ok(Goal { kind, colour })
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::ArbitraryBoard;
    use crate::layout;

    fn board(layout: crate::Layout) -> Block {
        Block::from_layout((0, 0), 4, 2, &layout).unwrap()
    }

    quickcheck! {
        fn scores_are_bounded(board: ArbitraryBoard) -> bool {
            let board = board.0;
            let cells = board.leaf_colours().count() as u32;
            let side = board.cells_per_side() as u32;
            COLOUR_LIST.into_iter().all(|colour| {
                Goal::new(GoalKind::Blob, colour).score(&board) <= cells
                    && Goal::new(GoalKind::Perimeter, colour).score(&board) <= 4 * side
            })
        }

        fn blob_ignores_which_colour_is_targeted(board: ArbitraryBoard) -> bool {
            // Swapping two colours everywhere keeps the connectivity, so the
            // scores of the two colours swap too.
            let board = board.0;
            let swapped_layout = swap_colours(&board.to_layout(), Colour::Red, Colour::Blue);
            let swapped = Block::from_layout(board.position(), board.size(), board.max_depth(), &swapped_layout).unwrap();
            Goal::new(GoalKind::Blob, Colour::Red).score(&board) == Goal::new(GoalKind::Blob, Colour::Blue).score(&swapped)
                && Goal::new(GoalKind::Blob, Colour::Green).score(&board) == Goal::new(GoalKind::Blob, Colour::Green).score(&swapped)
        }
    }

    fn swap_colours(layout: &crate::Layout, a: Colour, b: Colour) -> crate::Layout {
        match layout {
            crate::Layout::Leaf(c) if *c == a => crate::Layout::Leaf(b),
            crate::Layout::Leaf(c) if *c == b => crate::Layout::Leaf(a),
            crate::Layout::Leaf(c) => crate::Layout::Leaf(*c),
            crate::Layout::Split(children) => {
                crate::Layout::Split(Box::new(crate::Quadrant::ALL.map(|quadrant| {
                    swap_colours(&children[quadrant.index()], a, b)
                })))
            }
        }
    }

    #[test]
    fn perimeter_full_board() {
        let board = Block::new((0, 0), 16, 2, Colour::Yellow);
        // 12 border cells, plus the 4 corners counted a second time
        assert_eq!(Goal::new(GoalKind::Perimeter, Colour::Yellow).score(&board), 16);
        assert_eq!(Goal::new(GoalKind::Perimeter, Colour::Red).score(&board), 0);
    }

    #[test]
    fn perimeter_corners_count_twice() {
        // Grid rows: R R B B / R R G R / Y Y R R / Y Y R R
        let board = board(layout!([red, [blue, blue, green, red], yellow, red]));
        let goal = Goal::new(GoalKind::Perimeter, Colour::Red);
        // top: 2 (one corner), bottom: 2 (one corner), left: 2, right: 3
        assert_eq!(goal.score(&board), 9);
        let goal = Goal::new(GoalKind::Perimeter, Colour::Blue);
        // top: 2, right: 1 (the corner)
        assert_eq!(goal.score(&board), 3);
    }

    #[test]
    fn single_cell_board() {
        let board = Block::new((0, 0), 1, 0, Colour::Green);
        assert_eq!(Goal::new(GoalKind::Perimeter, Colour::Green).score(&board), 4);
        assert_eq!(Goal::new(GoalKind::Blob, Colour::Green).score(&board), 1);
    }

    #[test]
    fn blob_is_four_connected() {
        // Grid rows: R R B B / R R G R / Y Y R R / Y Y R R
        let board = board(layout!([red, [blue, blue, green, red], yellow, red]));
        // The red cells at the top left don't touch the others diagonally
        assert_eq!(Goal::new(GoalKind::Blob, Colour::Red).score(&board), 5);
        assert_eq!(Goal::new(GoalKind::Blob, Colour::Yellow).score(&board), 4);
        assert_eq!(Goal::new(GoalKind::Blob, Colour::Blue).score(&board), 2);

        let diagonal = board_from_rows(&["RB", "BR"]);
        assert_eq!(Goal::new(GoalKind::Blob, Colour::Red).score(&diagonal), 1);
    }

    fn board_from_rows(rows: &[&str; 2]) -> Block {
        let colour = |c: u8| match c {
            b'R' => crate::Layout::Leaf(Colour::Red),
            _ => crate::Layout::Leaf(Colour::Blue),
        };
        let r = |i: usize, j: usize| colour(rows[i].as_bytes()[j]);
        let layout = crate::Layout::Split(Box::new([r(0, 0), r(0, 1), r(1, 0), r(1, 1)]));
        Block::from_layout((0, 0), 2, 1, &layout).unwrap()
    }

    #[test]
    fn goal_strings() {
        let goal: Goal = "blob:red".parse().unwrap();
        assert_eq!(goal, Goal::new(GoalKind::Blob, Colour::Red));
        assert_eq!(goal.to_string(), "blob:red");
        assert_eq!(
            "perimeter:yellow".parse::<Goal>(),
            Ok(Goal::new(GoalKind::Perimeter, Colour::Yellow))
        );
        assert_eq!(
            "diagonal:red".parse::<Goal>(),
            Err(InvalidGoalConfiguration::UnknownGoalKind(String::from("diagonal")))
        );
        assert_eq!(
            "blob:black".parse::<Goal>(),
            Err(InvalidGoalConfiguration::UnknownColour(String::from("black")))
        );
        assert_eq!(
            "blob".parse::<Goal>(),
            Err(InvalidGoalConfiguration::Malformed(String::from("blob")))
        );
        assert!(Goal::new(GoalKind::Perimeter, Colour::Blue)
            .description()
            .contains("Pacific Point"));
    }

    #[test]
    fn generated_goals_have_distinct_colours() {
        let mut rng = StdRng::seed_from_u64(3);
        let goals = generate_goals(4, &mut rng).unwrap();
        let mut colours: Vec<Colour> = goals.iter().map(|g| g.colour).collect();
        colours.sort();
        assert_eq!(colours, COLOUR_LIST.to_vec());
        assert_eq!(generate_goals(0, &mut rng).unwrap(), vec![]);
        assert_eq!(
            generate_goals(5, &mut rng),
            Err(InvalidGoalConfiguration::TooManyGoals {
                requested: 5,
                available: 4
            })
        );
    }
}
