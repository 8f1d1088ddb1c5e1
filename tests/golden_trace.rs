//! End-to-end traces: four slides right, then three up, on a fixed 8x8
//! layout and on the default seeded board

use star_slide::Cell;
use star_slide::consts::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_SEED};
use star_slide::sim::{
    Control, Direction, GameEvent, ScoreState, SimulationState, generate, tick,
};

const LAYOUT: &str = "
..*./...
...#.O..
..../...
*.......
...G....
..C.....
#.......
...O....
";

fn press(state: &mut SimulationState, dir: Direction) -> Vec<GameEvent> {
    state.handle_input(Control::Slide(dir), true);
    tick(state, 1.0 / 60.0)
}

#[test]
fn test_golden_trace() {
    let mut state = SimulationState::from_layout(LAYOUT).unwrap();
    let mut events = Vec::new();

    for _ in 0..4 {
        events.extend(press(&mut state, Direction::Right));
    }
    for _ in 0..3 {
        events.extend(press(&mut state, Direction::Up));
    }

    assert_eq!(
        events,
        vec![
            GameEvent::Moved { to: Cell::new(1, 0) },
            GameEvent::StarCollected { at: Cell::new(2, 0) },
            GameEvent::Moved { to: Cell::new(3, 0) },
            // Right deflects toward -y, which is off the board here
            GameEvent::Deflected {
                reflector: Cell::new(4, 0),
                to: Cell::new(4, 0)
            },
            GameEvent::Moved { to: Cell::new(4, 1) },
            GameEvent::Deflected {
                reflector: Cell::new(4, 2),
                to: Cell::new(5, 2)
            },
            GameEvent::FellInHole {
                hole: Cell::new(5, 1),
                to: Cell::new(5, 3)
            },
        ]
    );
    assert_eq!(state.cursor(), Cell::new(5, 3));
    assert_eq!(
        state.score(),
        ScoreState {
            star_points: 0,
            hole_points: 1
        }
    );
    assert_eq!(state.ticks, 7);
}

/// `generate(8, 8, DEFAULT_SEED)`, row `y = 0` first
const SEEDED_LAYOUT: &str = "\
...//O.*
/*.OOO#*
.OOO**OO
##OO/**.
.OO/*#/G
*OCO#*.*
/.//#/#*
*/*.**O#
";

#[test]
fn test_seeded_board_layout() {
    let board = generate(BOARD_WIDTH, BOARD_HEIGHT, DEFAULT_SEED).unwrap();
    assert_eq!(board.to_layout(), SEEDED_LAYOUT);
}

#[test]
fn test_seeded_trace() {
    let run = || {
        let mut state = SimulationState::construct(DEFAULT_SEED, 8, 8).unwrap();
        let mut events = Vec::new();
        for dir in [Direction::Right; 4].into_iter().chain([Direction::Up; 3]) {
            events.extend(press(&mut state, dir));
        }
        (state.cursor(), state.score(), events)
    };

    let (cursor, score, events) = run();
    assert_eq!(
        events,
        vec![
            GameEvent::Moved { to: Cell::new(1, 0) },
            GameEvent::Moved { to: Cell::new(2, 0) },
            GameEvent::Deflected {
                reflector: Cell::new(3, 0),
                to: Cell::new(3, 0)
            },
            GameEvent::Deflected {
                reflector: Cell::new(4, 0),
                to: Cell::new(4, 0)
            },
            // Hole at the destination is a plain move
            GameEvent::Moved { to: Cell::new(4, 1) },
            GameEvent::StarCollected { at: Cell::new(4, 2) },
            // Hole behind beats the reflector ahead
            GameEvent::FellInHole {
                hole: Cell::new(4, 1),
                to: Cell::new(4, 3)
            },
        ]
    );
    assert_eq!(cursor, Cell::new(4, 3));
    assert_eq!(
        score,
        ScoreState {
            star_points: 0,
            hole_points: 1
        }
    );
    assert_eq!(run(), (cursor, score, events));
}
