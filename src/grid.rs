/// Board geometry — cells, directions and bounds checks.

use rand::Rng;

/// A single board cell. Equality is by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`. May leave the grid.
    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset in screen coordinates (y grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True when `other` is the direct reversal of `self`.
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// The fixed playing field: cells (x, y) with 0 <= x < width, 0 <= y < height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// A uniformly random cell inside the grid.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// A random cell avoiding `occupied`. Falls back to a linear scan after
    /// too many rejected samples so a crowded board cannot loop forever.
    pub fn random_free_cell(&self, occupied: &[Cell], rng: &mut impl Rng) -> Cell {
        for _ in 0..1000 {
            let cell = self.random_cell(rng);
            if !occupied.contains(&cell) {
                return cell;
            }
        }
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                if !occupied.contains(&cell) {
                    return cell;
                }
            }
        }
        // Board completely full — nowhere better to go.
        self.random_cell(rng)
    }
}
