//! Per-kind index sets used for interaction lookup

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::board::{Board, CellKind};

/// Linear indices of every interactive cell, grouped by kind.
///
/// Built once after generation and read-only afterwards. `Floor`, `Goal` and
/// `Collectible` cells are not tracked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRegistry {
    pub walls: BTreeSet<usize>,
    pub stars: BTreeSet<usize>,
    pub holes: BTreeSet<usize>,
    pub reflectors: BTreeSet<usize>,
}

impl IndexRegistry {
    /// Single pass over the board
    pub fn build(board: &Board) -> Self {
        let mut registry = Self::default();
        for (index, &kind) in board.cells().iter().enumerate() {
            if let Some(set) = registry.set_mut(kind) {
                set.insert(index);
            }
        }
        log::debug!(
            "Index registry: {} walls, {} stars, {} holes, {} reflectors",
            registry.walls.len(),
            registry.stars.len(),
            registry.holes.len(),
            registry.reflectors.len()
        );
        registry
    }

    /// The set tracking `kind`, if it is tracked
    pub fn set(&self, kind: CellKind) -> Option<&BTreeSet<usize>> {
        match kind {
            CellKind::Wall => Some(&self.walls),
            CellKind::Star => Some(&self.stars),
            CellKind::Hole => Some(&self.holes),
            CellKind::Reflector => Some(&self.reflectors),
            CellKind::Floor | CellKind::Goal | CellKind::Collectible => None,
        }
    }

    fn set_mut(&mut self, kind: CellKind) -> Option<&mut BTreeSet<usize>> {
        match kind {
            CellKind::Wall => Some(&mut self.walls),
            CellKind::Star => Some(&mut self.stars),
            CellKind::Hole => Some(&mut self.holes),
            CellKind::Reflector => Some(&mut self.reflectors),
            CellKind::Floor | CellKind::Goal | CellKind::Collectible => None,
        }
    }

    /// Membership test; untracked kinds never contain anything
    pub fn contains(&self, kind: CellKind, index: usize) -> bool {
        self.set(kind).is_some_and(|set| set.contains(&index))
    }

    /// Total number of tracked cells
    pub fn tracked(&self) -> usize {
        self.walls.len() + self.stars.len() + self.holes.len() + self.reflectors.len()
    }
}
