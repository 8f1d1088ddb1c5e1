//! Simulation state and its construction
//!
//! Everything a frontend needs to draw a frame lives here. The state is
//! plain data: it holds no graphics resources and is serializable for
//! snapshots and replay checks.

use glam::Quat;
use serde::{Deserialize, Serialize};

use super::board::{Board, BoardConfig, CellKind};
use super::controls::{Control, Controls, Direction};
use super::error::SimError;
use super::index::IndexRegistry;
use super::roll::OrientationField;
use crate::Cell;
use crate::consts::ROLL_RATE;

/// The player token position
pub type Cursor = Cell;

/// Running score. Unbounded in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub star_points: i32,
    pub hole_points: i32,
}

/// Something that happened during a tick, for presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Slide hit a wall or the board edge
    Blocked { dir: Direction },
    /// Plain move
    Moved { to: Cell },
    StarCollected { at: Cell },
    FellInHole { hole: Cell, to: Cell },
    Deflected { reflector: Cell, to: Cell },
    /// Cursor finished a slide on the goal cell
    GoalReached { at: Cell },
    /// Reset key held this tick (nothing is reset)
    ResetRequested,
}

/// Complete simulation state
///
/// Snapshots leave out the index registry; it is rebuilt from the board on
/// restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StateData")]
pub struct SimulationState {
    /// Seed the board was generated from (`None` for hand-made layouts)
    pub seed: Option<u64>,
    board: Board,
    #[serde(skip)]
    registry: IndexRegistry,
    pub(crate) cursor: Cursor,
    pub(crate) score: ScoreState,
    pub(crate) orientations: OrientationField,
    /// Pending and held controls
    pub controls: Controls,
    /// Roll speed (radians per second)
    pub roll_rate: f32,
    /// Number of ticks processed
    pub ticks: u64,
}

/// Serialized form of [`SimulationState`]
#[derive(Deserialize)]
struct StateData {
    seed: Option<u64>,
    board: Board,
    cursor: Cursor,
    score: ScoreState,
    orientations: OrientationField,
    controls: Controls,
    roll_rate: f32,
    ticks: u64,
}

impl TryFrom<StateData> for SimulationState {
    type Error = SimError;

    fn try_from(data: StateData) -> Result<Self, Self::Error> {
        let board = data.board;
        if !board.contains(data.cursor) {
            return Err(SimError::Snapshot(format!(
                "cursor {} is off the {}x{} board",
                data.cursor,
                board.width(),
                board.height()
            )));
        }
        let orientations = data.orientations;
        if orientations.width() != board.width() || orientations.height() != board.height() {
            return Err(SimError::Snapshot(format!(
                "orientation field is {}x{}, board is {}x{}",
                orientations.width(),
                orientations.height(),
                board.width(),
                board.height()
            )));
        }
        Ok(Self {
            seed: data.seed,
            registry: IndexRegistry::build(&board),
            board,
            cursor: data.cursor,
            score: data.score,
            orientations,
            controls: data.controls,
            roll_rate: data.roll_rate,
            ticks: data.ticks,
        })
    }
}

impl SimulationState {
    /// Build a board from `seed` with the reference goal/collectible cells.
    ///
    /// Fixed cells that do not fit a small board are left out, so only a
    /// zero-area board fails.
    pub fn construct(seed: u64, width: u32, height: u32) -> Result<Self, SimError> {
        Self::new(&BoardConfig::reference(width, height, seed))
    }

    /// Generate the board described by `config` and index it
    pub fn new(config: &BoardConfig) -> Result<Self, SimError> {
        let board = config.generate()?;
        let mut state = Self::from_board(board);
        state.seed = Some(config.seed);
        log::info!(
            "New {}x{} board (seed {:#x})",
            config.width,
            config.height,
            config.seed
        );
        Ok(state)
    }

    /// Wrap an existing board. The cursor starts on cell 0.
    pub fn from_board(board: Board) -> Self {
        let registry = IndexRegistry::build(&board);
        let orientations = OrientationField::new(board.width(), board.height());
        Self {
            seed: None,
            board,
            registry,
            cursor: Cell::ORIGIN,
            score: ScoreState::default(),
            orientations,
            controls: Controls::default(),
            roll_rate: ROLL_RATE,
            ticks: 0,
        }
    }

    /// Parse a text layout into a fresh state
    pub fn from_layout(text: &str) -> Result<Self, SimError> {
        Ok(Self::from_board(Board::from_layout(text)?))
    }

    /// Feed a key press or release from the input collaborator.
    ///
    /// Auto-repeat must be filtered before calling this.
    pub fn handle_input(&mut self, control: Control, pressed: bool) {
        self.controls.apply(control, pressed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    pub fn cell_kind(&self, cell: Cell) -> Option<CellKind> {
        self.board.kind_at(cell)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn star_points(&self) -> i32 {
        self.score.star_points
    }

    pub fn hole_points(&self) -> i32 {
        self.score.hole_points
    }

    /// Visual orientation of one cell
    pub fn orientation(&self, cell: Cell) -> Option<Quat> {
        self.orientations.get(cell)
    }

    pub fn orientations(&self) -> &OrientationField {
        &self.orientations
    }

    /// Snapshot as JSON
    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(|e| SimError::Snapshot(e.to_string()))
    }

    /// Restore a snapshot taken with [`SimulationState::to_json`].
    ///
    /// Rejects snapshots whose board, cursor and orientation field disagree.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::Snapshot(e.to_string()))
    }
}
