//! Board cells and seeded board generation

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use crate::Cell;
use crate::consts::*;

/// What occupies a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Floor,
    Wall,
    Star,
    Hole,
    Reflector,
    Goal,
    Collectible,
}

impl CellKind {
    /// Candidates for randomly assigned cells, in draw order
    pub const RANDOM_CANDIDATES: [CellKind; 5] = [
        CellKind::Wall,
        CellKind::Star,
        CellKind::Floor,
        CellKind::Reflector,
        CellKind::Hole,
    ];

    /// Layout character
    pub fn symbol(self) -> char {
        match self {
            CellKind::Floor => '.',
            CellKind::Wall => '#',
            CellKind::Star => '*',
            CellKind::Hole => 'O',
            CellKind::Reflector => '/',
            CellKind::Goal => 'G',
            CellKind::Collectible => 'C',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellKind::Floor),
            '#' => Some(CellKind::Wall),
            '*' => Some(CellKind::Star),
            'O' | 'o' => Some(CellKind::Hole),
            '/' => Some(CellKind::Reflector),
            'G' => Some(CellKind::Goal),
            'C' => Some(CellKind::Collectible),
            _ => None,
        }
    }
}

/// Board generation parameters
///
/// A fixed index of `None` leaves that cell to the random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    /// Linear index forced to `Goal`
    pub goal_index: Option<usize>,
    /// Linear index forced to `Collectible`
    pub collectible_index: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::reference(BOARD_WIDTH, BOARD_HEIGHT, DEFAULT_SEED)
    }
}

impl BoardConfig {
    /// Reference placement: goal at 39 and collectible at 42, each kept
    /// only when the board has that many cells.
    pub fn reference(width: u32, height: u32, seed: u64) -> Self {
        let cells = width as usize * height as usize;
        let fits = |index: usize| (index < cells).then_some(index);
        Self {
            width,
            height,
            seed,
            goal_index: fits(GOAL_INDEX),
            collectible_index: fits(COLLECTIBLE_INDEX),
        }
    }

    /// Check dimensions and fixed cells before any cell is drawn
    pub fn validate(&self) -> Result<(), SimError> {
        let cells = self.width as usize * self.height as usize;
        if cells == 0 {
            return Err(SimError::DegenerateBoard {
                width: self.width,
                height: self.height,
            });
        }
        let fixed = [
            ("goal", self.goal_index),
            ("collectible", self.collectible_index),
        ];
        for (name, index) in fixed {
            let Some(index) = index else { continue };
            if index >= cells {
                return Err(SimError::FixedCellOutOfRange { name, index, cells });
            }
            if index == 0 {
                return Err(SimError::FixedCellConflict { index });
            }
        }
        if let Some(goal) = self.goal_index {
            if self.collectible_index == Some(goal) {
                return Err(SimError::FixedCellConflict { index: goal });
            }
        }
        Ok(())
    }

    /// Generate the board described by this config
    pub fn generate(&self) -> Result<Board, SimError> {
        self.validate()?;

        let count = self.width as usize * self.height as usize;
        let mut rng = Pcg32::seed_from_u64(self.seed);
        let mut cells = Vec::with_capacity(count);
        let candidates = CellKind::RANDOM_CANDIDATES.len() as u32;

        for i in 0..count {
            let kind = if i == 0 {
                // Player start
                CellKind::Floor
            } else if Some(i) == self.goal_index {
                CellKind::Goal
            } else if Some(i) == self.collectible_index {
                CellKind::Collectible
            } else {
                // Modulo over the raw Pcg32 stream
                let pick = rng.next_u32() % candidates;
                CellKind::RANDOM_CANDIDATES[pick as usize]
            };
            cells.push(kind);
        }

        log::debug!(
            "Generated {}x{} board from seed {:#x}",
            self.width,
            self.height,
            self.seed
        );

        Ok(Board {
            width: self.width,
            height: self.height,
            cells,
        })
    }
}

/// Generate a board with the reference goal/collectible placement.
///
/// Fails only for a zero-area board.
pub fn generate(width: u32, height: u32, seed: u64) -> Result<Board, SimError> {
    BoardConfig::reference(width, height, seed).generate()
}

/// Serialized form of [`Board`], checked before it becomes one
#[derive(Deserialize)]
struct BoardData {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

impl TryFrom<BoardData> for Board {
    type Error = SimError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let BoardData {
            width,
            height,
            cells,
        } = data;
        let expected = width as usize * height as usize;
        if expected == 0 {
            return Err(SimError::DegenerateBoard { width, height });
        }
        if cells.len() != expected {
            return Err(SimError::Snapshot(format!(
                "{width}x{height} board has {} cells, expected {expected}",
                cells.len()
            )));
        }
        if cells[0] != CellKind::Floor {
            return Err(SimError::Snapshot("start cell must be floor".into()));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

/// Immutable grid of cell kinds, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

impl Board {
    /// Parse a text layout: one row per line, first line is row `y = 0`.
    ///
    /// Blank lines are skipped. All rows must have the same width and the
    /// start cell (index 0) must be floor.
    pub fn from_layout(text: &str) -> Result<Self, SimError> {
        let mut width: Option<u32> = None;
        let mut cells = Vec::new();
        let mut height = 0u32;

        for (line_no, line) in text.lines().enumerate() {
            let row = line.trim();
            if row.is_empty() {
                continue;
            }
            let line = line_no + 1;

            let row_width = row.chars().count() as u32;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(SimError::Layout {
                        line,
                        message: format!("row has {row_width} cells, expected {w}"),
                    });
                }
                Some(_) => {}
            }

            for c in row.chars() {
                let kind = CellKind::from_symbol(c).ok_or_else(|| SimError::Layout {
                    line,
                    message: format!("unknown cell symbol '{c}'"),
                })?;
                cells.push(kind);
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if cells.is_empty() {
            return Err(SimError::DegenerateBoard { width, height });
        }
        if cells[0] != CellKind::Floor {
            return Err(SimError::Layout {
                line: 1,
                message: "start cell must be floor".into(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Render back to the layout format accepted by [`Board::from_layout`]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            out.extend(row.iter().map(|k| k.symbol()));
            out.push('\n');
        }
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Kind at a linear index
    pub fn kind(&self, index: usize) -> Option<CellKind> {
        self.cells.get(index).copied()
    }

    /// Kind at a board position
    pub fn kind_at(&self, cell: Cell) -> Option<CellKind> {
        if !self.contains(cell) {
            return None;
        }
        self.kind(cell.to_index(self.width))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Iterate `(position, kind)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellKind)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &k)| (Cell::from_index(i, width), k))
    }
}
