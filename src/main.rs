//! Star Slide entry point
//!
//! Headless driver: builds a board, replays a move script and prints the
//! result.
//!
//! Usage: `star-slide [settings.json] [moves]`
//!
//! Moves: `U D L R` slide one cell; `u d l r` hold the matching roll key for a
//! single frame; `!` taps reset.

use std::path::Path;
use std::process::ExitCode;

use star_slide::Settings;
use star_slide::input::{Key, KeyEvent, KeyMap};
use star_slide::sim::{GameEvent, SimulationState, tick};

/// Frame time used for scripted moves
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> ExitCode {
    env_logger::init();

    let mut settings = Settings::default();
    let mut script = String::new();
    for arg in std::env::args().skip(1) {
        if arg.ends_with(".json") {
            settings = Settings::load_or_default(Path::new(&arg));
        } else {
            script.push_str(&arg);
        }
    }

    let mut state = match settings.build() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot build board: {e}");
            return ExitCode::FAILURE;
        }
    };

    for c in script.chars() {
        let Some((key, held)) = script_key(c) else {
            log::warn!("Ignoring unknown move '{c}'");
            continue;
        };
        KeyMap.handle(&mut state, KeyEvent::down(key));
        if !held {
            KeyMap.handle(&mut state, KeyEvent::up(key));
        }
        for event in tick(&mut state, FRAME_DT) {
            print_event(&event);
        }
        if held {
            KeyMap.handle(&mut state, KeyEvent::up(key));
        }
    }

    print!("{}", render(&state));
    println!(
        "cursor {}  stars {}  holes {}",
        state.cursor(),
        state.star_points(),
        state.hole_points()
    );
    ExitCode::SUCCESS
}

/// Key for a script character and whether it is held through the frame
fn script_key(c: char) -> Option<(Key, bool)> {
    Some(match c {
        'U' => (Key::ArrowUp, false),
        'D' => (Key::ArrowDown, false),
        'L' => (Key::ArrowLeft, false),
        'R' => (Key::ArrowRight, false),
        'u' => (Key::W, true),
        'd' => (Key::S, true),
        'l' => (Key::A, true),
        'r' => (Key::D, true),
        '!' => (Key::R, true),
        _ => return None,
    })
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::StarCollected { at } => println!("star at {at}"),
        GameEvent::FellInHole { hole, to } => println!("hole behind at {hole}, now at {to}"),
        GameEvent::Deflected { reflector, to } => {
            println!("deflected by {reflector} to {to}")
        }
        GameEvent::GoalReached { at } => println!("goal reached at {at}"),
        GameEvent::Blocked { dir } => println!("blocked moving {dir:?}"),
        GameEvent::ResetRequested => println!("reset (not implemented)"),
        GameEvent::Moved { .. } => {}
    }
}

/// Text frame with the top row first and the cursor drawn as `@`
fn render(state: &SimulationState) -> String {
    let board = state.board();
    let cursor = state.cursor();
    let mut out = String::new();
    for y in (0..board.height()).rev() {
        for x in 0..board.width() {
            let cell = star_slide::Cell::new(x, y);
            let symbol = if cell == cursor {
                '@'
            } else {
                board.kind_at(cell).map(|k| k.symbol()).unwrap_or(' ')
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
