//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Board generated once from a seeded RNG
//! - Fixed rule order for every slide
//! - No rendering or platform dependencies

pub mod board;
pub mod controls;
pub mod error;
pub mod index;
pub mod resolve;
pub mod roll;
pub mod state;
pub mod tick;

pub use board::{Board, BoardConfig, CellKind, generate};
pub use controls::{Control, Controls, Direction};
pub use error::SimError;
pub use index::IndexRegistry;
pub use resolve::{SlideOutcome, deflection, resolve_slide};
pub use roll::{OrientationField, roll_delta};
pub use state::{Cursor, GameEvent, ScoreState, SimulationState};
pub use tick::tick;
