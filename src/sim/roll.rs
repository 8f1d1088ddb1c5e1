//! Per-cell orientation and the row/column roll
//!
//! Purely visual state: nothing here feeds back into movement or scoring.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::controls::{Controls, Direction};
use super::error::SimError;
use crate::Cell;

/// Incremental rotation for one tick from the held roll keys.
///
/// Composed in the order left, right, up, down. Left/right turn about the
/// vertical (`Y`) axis, up/down about the horizontal (`X`) axis, each pair with
/// opposite signs.
pub fn roll_delta(controls: &Controls, elapsed: f32, rate: f32) -> Quat {
    let amount = elapsed * rate;
    let mut dr = Quat::IDENTITY;
    for (dir, axis, sign) in [
        (Direction::Left, Vec3::Y, 1.0),
        (Direction::Right, Vec3::Y, -1.0),
        (Direction::Up, Vec3::X, 1.0),
        (Direction::Down, Vec3::X, -1.0),
    ] {
        if controls.roll_held(dir) {
            dr = Quat::from_axis_angle(axis, sign * amount) * dr;
        }
    }
    dr
}

/// Serialized form of [`OrientationField`]
#[derive(Deserialize)]
struct OrientationData {
    width: u32,
    height: u32,
    rotations: Vec<Quat>,
}

impl TryFrom<OrientationData> for OrientationField {
    type Error = SimError;

    fn try_from(data: OrientationData) -> Result<Self, Self::Error> {
        let expected = data.width as usize * data.height as usize;
        if data.rotations.len() != expected {
            return Err(SimError::Snapshot(format!(
                "{}x{} orientation field has {} entries, expected {expected}",
                data.width,
                data.height,
                data.rotations.len()
            )));
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            rotations: data.rotations,
        })
    }
}

/// One orientation per board cell, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrientationData")]
pub struct OrientationField {
    width: u32,
    height: u32,
    rotations: Vec<Quat>,
}

impl OrientationField {
    /// All cells start at identity
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rotations: vec![Quat::IDENTITY; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, cell: Cell) -> Option<Quat> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        self.rotations.get(cell.to_index(self.width)).copied()
    }

    /// All orientations in row-major order
    pub fn as_slice(&self) -> &[Quat] {
        &self.rotations
    }

    /// Pre-multiply `dr` into every cell on the pivot's row and column.
    ///
    /// The pivot itself is rotated once. Returns the number of cells touched.
    pub fn apply(&mut self, dr: Quat, pivot: Cell) -> usize {
        if dr == Quat::IDENTITY {
            return 0;
        }

        let mut touched = 0;
        for x in 0..self.width {
            self.rotate_cell(Cell::new(x, pivot.y), dr);
            touched += 1;
        }
        for y in 0..self.height {
            if y != pivot.y {
                self.rotate_cell(Cell::new(pivot.x, y), dr);
                touched += 1;
            }
        }
        touched
    }

    fn rotate_cell(&mut self, cell: Cell, dr: Quat) {
        if let Some(r) = self.rotations.get_mut(cell.to_index(self.width)) {
            // Renormalize to keep float drift from accumulating
            *r = (dr * *r).normalize();
        }
    }
}
