/// All game entity types — pure data, no logic.

use crate::grid::{Cell, Direction, Grid};

#[derive(Clone, Debug, PartialEq)]
pub enum FoodKind {
    /// Regular food: +1 point, snake grows one segment.
    Apple,
    /// Occasional bonus: +2 points, snake shrinks and the game speeds up.
    Coconut,
}

#[derive(Clone, Debug)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// Occupied cells, head first.
    pub body: Vec<Cell>,
    pub direction: Direction,
    /// Steering input buffered until the next tick. Direct reversals are
    /// dropped when the buffer is applied.
    pub queued: Option<Direction>,
}

impl Snake {
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub cell: Cell,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct Session {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    /// At most one coconut is on the board at a time.
    pub coconut: Option<Food>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    /// The best score seen so far (shown in HUD and menus).
    pub high_score: u32,
    pub state: GameState,
    pub tick: u64,
    /// Current milliseconds per logic tick; coconuts lower it.
    pub tick_ms: u64,
}
