//! Player controls: one-shot slides, held rolls and the reset key

use serde::{Deserialize, Serialize};

/// Board direction. `Up` is increasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which pending slides are resolved within one tick
    pub const SLIDE_ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A logical control fed by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Edge-triggered single-cell move
    Slide(Direction),
    /// Level-triggered row/column roll
    Roll(Direction),
    /// Level-triggered reset key (acknowledged, never acted on)
    Reset,
}

/// Pending control flags for the next tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    // One-shot, cleared by the resolver once consumed
    pub slide_up: bool,
    pub slide_down: bool,
    pub slide_left: bool,
    pub slide_right: bool,

    // Held
    pub roll_up: bool,
    pub roll_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,

    pub reset: bool,
}

impl Controls {
    /// Apply a press or release.
    ///
    /// Releasing a slide key does nothing: a pending slide is only cleared by
    /// the resolver, so a press and release that land between two ticks still
    /// move the cursor once.
    pub fn apply(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Slide(dir) => {
                if pressed {
                    *self.slide_flag(dir) = true;
                }
            }
            Control::Roll(dir) => *self.roll_flag(dir) = pressed,
            Control::Reset => self.reset = pressed,
        }
    }

    pub fn slide_pending(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.slide_up,
            Direction::Down => self.slide_down,
            Direction::Left => self.slide_left,
            Direction::Right => self.slide_right,
        }
    }

    /// Read and clear a pending slide
    pub fn take_slide(&mut self, dir: Direction) -> bool {
        std::mem::take(self.slide_flag(dir))
    }

    pub fn roll_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.roll_up,
            Direction::Down => self.roll_down,
            Direction::Left => self.roll_left,
            Direction::Right => self.roll_right,
        }
    }

    pub fn any_roll_held(&self) -> bool {
        self.roll_up || self.roll_down || self.roll_left || self.roll_right
    }

    fn slide_flag(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Up => &mut self.slide_up,
            Direction::Down => &mut self.slide_down,
            Direction::Left => &mut self.slide_left,
            Direction::Right => &mut self.slide_right,
        }
    }

    fn roll_flag(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Up => &mut self.roll_up,
            Direction::Down => &mut self.roll_down,
            Direction::Left => &mut self.roll_left,
            Direction::Right => &mut self.roll_right,
        }
    }
}
