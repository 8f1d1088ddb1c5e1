//! Slide resolution against the index registry
//!
//! A slide targets the neighbouring cell and applies the first matching rule:
//! 1. wall at the destination: stay
//! 2. star at the destination: move, +1 star point
//! 3. hole one step *behind* the cursor: move, -1 star point, +1 hole point
//! 4. reflector at the destination: move, then deflect one more cell
//! 5. otherwise: move
//!
//! Rule 3 deliberately inspects the cell opposite the movement, not the
//! destination. Reflector deflection follows the fixed table in [`deflection`].

use serde::{Deserialize, Serialize};

use super::board::CellKind;
use super::controls::Direction;
use super::index::IndexRegistry;
use crate::Cell;

/// Result of resolving one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideOutcome {
    /// Destination is off the board
    OutOfBounds,
    /// Destination is a wall
    Blocked { wall: Cell },
    /// Moved onto a star
    Star { to: Cell },
    /// Moved while a hole lies behind the cursor
    Hole { to: Cell, hole: Cell },
    /// Moved onto a reflector and was pushed on to `to`
    Reflected { reflector: Cell, to: Cell },
    /// Plain move
    Moved { to: Cell },
}

impl SlideOutcome {
    /// Cursor position after the slide
    pub fn cursor_after(&self, from: Cell) -> Cell {
        match *self {
            SlideOutcome::OutOfBounds | SlideOutcome::Blocked { .. } => from,
            SlideOutcome::Star { to }
            | SlideOutcome::Hole { to, .. }
            | SlideOutcome::Reflected { to, .. }
            | SlideOutcome::Moved { to } => to,
        }
    }

    /// `(star_points, hole_points)` change
    pub fn score_delta(&self) -> (i32, i32) {
        match self {
            SlideOutcome::Star { .. } => (1, 0),
            SlideOutcome::Hole { .. } => (-1, 1),
            _ => (0, 0),
        }
    }
}

/// Extra offset applied after landing on a reflector.
///
/// Vertical slides are pushed along `+x`; horizontal slides along `y`, with
/// left and right pushed in opposite directions.
pub fn deflection(dir: Direction) -> (i32, i32) {
    match dir {
        Direction::Up => (1, 0),
        Direction::Down => (1, 0),
        Direction::Left => (0, 1),
        Direction::Right => (0, -1),
    }
}

/// Resolve a single slide from `cursor` on a `width x height` board.
///
/// Pure: the caller applies the outcome. A deflection that would leave the
/// board is dropped and the cursor stays on the reflector.
pub fn resolve_slide(
    registry: &IndexRegistry,
    width: u32,
    height: u32,
    cursor: Cell,
    dir: Direction,
) -> SlideOutcome {
    let (dx, dy) = dir.delta();
    let Some(dest) = cursor.offset(dx, dy, width, height) else {
        return SlideOutcome::OutOfBounds;
    };
    let dest_index = dest.to_index(width);

    if registry.contains(CellKind::Wall, dest_index) {
        return SlideOutcome::Blocked { wall: dest };
    }

    if registry.contains(CellKind::Star, dest_index) {
        return SlideOutcome::Star { to: dest };
    }

    if let Some(behind) = cursor.offset(-dx, -dy, width, height) {
        if registry.contains(CellKind::Hole, behind.to_index(width)) {
            return SlideOutcome::Hole {
                to: dest,
                hole: behind,
            };
        }
    }

    if registry.contains(CellKind::Reflector, dest_index) {
        let (rx, ry) = deflection(dir);
        let to = dest.offset(rx, ry, width, height).unwrap_or(dest);
        return SlideOutcome::Reflected {
            reflector: dest,
            to,
        };
    }

    SlideOutcome::Moved { to: dest }
}
