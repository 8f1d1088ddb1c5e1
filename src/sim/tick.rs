//! Per-frame simulation step
//!
//! Resolves pending slides, then applies the held roll. Nothing here can fail.

use super::board::CellKind;
use super::controls::Direction;
use super::resolve::{SlideOutcome, resolve_slide};
use super::roll::roll_delta;
use super::state::{GameEvent, SimulationState};

/// Advance the simulation by one frame of `elapsed` seconds
pub fn tick(state: &mut SimulationState, elapsed: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.ticks += 1;

    // Reset is acknowledged only; board, cursor and score are untouched
    if state.controls.reset {
        log::debug!("Reset requested (no-op)");
        events.push(GameEvent::ResetRequested);
    }

    resolve_slides(state, &mut events);

    let dr = roll_delta(&state.controls, elapsed, state.roll_rate);
    let touched = state.orientations.apply(dr, state.cursor);
    if touched > 0 {
        log::trace!("Rolled {} cells around {}", touched, state.cursor);
    }

    events
}

/// Consume every pending slide in Up, Down, Left, Right order.
///
/// Each slide starts from where the previous one left the cursor.
fn resolve_slides(state: &mut SimulationState, events: &mut Vec<GameEvent>) {
    let width = state.board().width();
    let height = state.board().height();

    for dir in Direction::SLIDE_ORDER {
        if !state.controls.take_slide(dir) {
            continue;
        }

        let from = state.cursor;
        let outcome = resolve_slide(state.registry(), width, height, from, dir);

        let (star_delta, hole_delta) = outcome.score_delta();
        state.score.star_points += star_delta;
        state.score.hole_points += hole_delta;
        state.cursor = outcome.cursor_after(from);

        log::debug!(
            "Slide {:?} from {}: {:?} (stars {}, holes {})",
            dir,
            from,
            outcome,
            state.score.star_points,
            state.score.hole_points
        );

        events.push(match outcome {
            SlideOutcome::OutOfBounds | SlideOutcome::Blocked { .. } => {
                GameEvent::Blocked { dir }
            }
            SlideOutcome::Star { to } => GameEvent::StarCollected { at: to },
            SlideOutcome::Hole { to, hole } => GameEvent::FellInHole { hole, to },
            SlideOutcome::Reflected { reflector, to } => GameEvent::Deflected { reflector, to },
            SlideOutcome::Moved { to } => GameEvent::Moved { to },
        });

        if state.cursor != from && state.cell_kind(state.cursor) == Some(CellKind::Goal) {
            log::info!("Goal reached at {}", state.cursor);
            events.push(GameEvent::GoalReached { at: state.cursor });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use crate::consts::ROLL_RATE;
    use crate::sim::controls::{Control, Controls};
    use crate::sim::state::ScoreState;
    use glam::Quat;

    fn slide(state: &mut SimulationState, dir: Direction) -> Vec<GameEvent> {
        state.handle_input(Control::Slide(dir), true);
        tick(state, 1.0 / 60.0)
    }

    #[test]
    fn test_four_rights_on_open_row() {
        let mut state = SimulationState::from_layout("......\n......\n").unwrap();
        for _ in 0..4 {
            slide(&mut state, Direction::Right);
        }
        assert_eq!(state.cursor(), Cell::new(4, 0));
        assert_eq!(state.score(), ScoreState::default());
        assert_eq!(state.ticks, 4);
    }

    #[test]
    fn test_slide_consumed_once() {
        let mut state = SimulationState::from_layout("....\n").unwrap();
        slide(&mut state, Direction::Right);
        assert_eq!(state.cursor(), Cell::new(1, 0));

        // No new press: cursor stays
        tick(&mut state, 1.0 / 60.0);
        assert_eq!(state.cursor(), Cell::new(1, 0));
        assert!(!state.controls.slide_right);
    }

    #[test]
    fn test_edge_clears_flag() {
        let mut state = SimulationState::from_layout("..\n..\n").unwrap();
        let events = slide(&mut state, Direction::Left);
        assert_eq!(state.cursor(), Cell::ORIGIN);
        assert!(!state.controls.slide_left);
        assert_eq!(
            events,
            vec![GameEvent::Blocked {
                dir: Direction::Left
            }]
        );
    }

    #[test]
    fn test_wall_and_star_scoring() {
        let mut state = SimulationState::from_layout(".*#\n").unwrap();
        let events = slide(&mut state, Direction::Right);
        assert_eq!(events, vec![GameEvent::StarCollected { at: Cell::new(1, 0) }]);
        assert_eq!(state.star_points(), 1);

        slide(&mut state, Direction::Right);
        assert_eq!(state.cursor(), Cell::new(1, 0));
        assert_eq!(state.star_points(), 1);

        // Stars are never removed: stepping back on scores again
        slide(&mut state, Direction::Left);
        slide(&mut state, Direction::Right);
        assert_eq!(state.star_points(), 2);
    }

    #[test]
    fn test_hole_behind_can_go_negative() {
        // Hole at (0,1); cursor walks up from (0,0) through (0,2) to (0,3)
        let mut state = SimulationState::from_layout(".\nO\n.\n.\n").unwrap();
        slide(&mut state, Direction::Up);
        slide(&mut state, Direction::Up);
        assert_eq!(state.cursor(), Cell::new(0, 2));
        assert_eq!(state.score(), ScoreState::default());

        let events = slide(&mut state, Direction::Up);
        assert_eq!(state.cursor(), Cell::new(0, 3));
        assert_eq!(
            state.score(),
            ScoreState {
                star_points: -1,
                hole_points: 1
            }
        );
        assert_eq!(
            events,
            vec![GameEvent::FellInHole {
                hole: Cell::new(0, 1),
                to: Cell::new(0, 3)
            }]
        );
    }

    #[test]
    fn test_multiple_slides_compose_in_order() {
        let mut state = SimulationState::from_layout("...\n...\n...\n").unwrap();
        state.handle_input(Control::Slide(Direction::Right), true);
        state.handle_input(Control::Slide(Direction::Up), true);
        state.handle_input(Control::Slide(Direction::Down), true);

        // Up to (0,1), Down back to (0,0), Right to (1,0)
        let events = tick(&mut state, 0.0);
        assert_eq!(state.cursor(), Cell::new(1, 0));
        assert_eq!(events.len(), 3);
        assert_eq!(state.controls, Controls::default());
    }

    #[test]
    fn test_goal_reached_event() {
        let mut state = SimulationState::from_layout(".G\n").unwrap();
        let events = slide(&mut state, Direction::Right);
        assert_eq!(
            events,
            vec![
                GameEvent::Moved { to: Cell::new(1, 0) },
                GameEvent::GoalReached { at: Cell::new(1, 0) }
            ]
        );
    }

    #[test]
    fn test_reset_is_inert() {
        let mut state = SimulationState::construct(3, 8, 8).unwrap();
        slide(&mut state, Direction::Right);
        let cursor = state.cursor();
        let score = state.score();
        let board = state.board().clone();

        state.handle_input(Control::Reset, true);
        let events = tick(&mut state, 0.1);
        assert_eq!(events, vec![GameEvent::ResetRequested]);
        assert_eq!(state.cursor(), cursor);
        assert_eq!(state.score(), score);
        assert_eq!(state.board(), &board);

        state.handle_input(Control::Reset, false);
        assert!(tick(&mut state, 0.1).is_empty());
    }

    #[test]
    fn test_roll_left_accumulates_and_freezes() {
        let mut state = SimulationState::from_layout("...\n...\n...\n").unwrap();
        state.handle_input(Control::Slide(Direction::Right), true);
        state.handle_input(Control::Roll(Direction::Left), true);

        // Slide runs before the roll, so the pivot is (1,0)
        for _ in 0..10 {
            tick(&mut state, 0.05);
        }
        let expected = Quat::from_rotation_y(0.5 * ROLL_RATE);
        let pivot = Cell::new(1, 0);
        assert_eq!(state.cursor(), pivot);

        for (i, &q) in state.orientations().as_slice().iter().enumerate() {
            let cell = Cell::from_index(i, 3);
            if cell.x == pivot.x || cell.y == pivot.y {
                assert!(q.abs_diff_eq(expected, 1e-5), "{cell} not rolled");
            } else {
                assert_eq!(q, Quat::IDENTITY, "{cell} rolled");
            }
        }

        state.handle_input(Control::Roll(Direction::Left), false);
        let before = state.orientations().clone();
        tick(&mut state, 0.5);
        assert_eq!(state.orientations(), &before);
    }
}
