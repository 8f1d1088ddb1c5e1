//! Star Slide - a turn-based grid puzzle
//!
//! Core modules:
//! - `sim`: Deterministic board simulation (generation, movement, scoring, roll)
//! - `settings`: Data-driven board configuration
//! - `input`: Raw key to control translation for frontends
//!
//! Rendering is left to the frontend: it reads the board, cursor, per-cell
//! orientation and score through `SimulationState` accessors after each tick.

pub mod input;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{SimError, SimulationState};

/// Reference configuration constants
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: u32 = 8;
    pub const BOARD_HEIGHT: u32 = 8;

    /// Seed used by the reference board
    pub const DEFAULT_SEED: u64 = 0xbead_1234;

    /// Linear index that always holds the goal
    pub const GOAL_INDEX: usize = 39;
    /// Linear index that always holds the collectible
    pub const COLLECTIBLE_INDEX: usize = 42;

    /// Roll speed while a roll key is held (radians per second)
    pub const ROLL_RATE: f32 = 1.0;
}

/// A board position (column `x`, row `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Row-major linear index on a board of the given width
    #[inline]
    pub fn to_index(self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    /// Inverse of [`Cell::to_index`]
    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        let w = width as usize;
        Self::new((index % w) as u32, (index / w) as u32)
    }

    /// Offset by `(dx, dy)`, or `None` if the result leaves `[0,width) x [0,height)`
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, width: u32, height: u32) -> Option<Cell> {
        let x = i64::from(self.x) + i64::from(dx);
        let y = i64::from(self.y) + i64::from(dy);
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return None;
        }
        Some(Cell::new(x as u32, y as u32))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
