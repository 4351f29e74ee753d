mod audio;
mod clock;
mod config;
mod error;
mod food;
mod game;
mod geometry;
mod input;
mod logger;
mod orientation;
mod render;
mod snake;
mod term;

use std::process::exit;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::TerminalBell;
use crate::clock::FrameLimiter;
use crate::config::Settings;
use crate::error::Result;
use crate::game::SnakeGame;
use crate::geometry::GridGeometry;
use crate::term::TermManager;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() {
    if let Err(err) = run() {
        tracing::error!(%err, "exiting");
        eprintln!("snake: {}", err);
        exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    logger::init_logger(&settings)?;

    // Fail on a small terminal before switching screens
    let mut term = TermManager::new()?;
    let geometry = GridGeometry::centered(term.get_terminal_size(), settings.grid_size)?;

    in_session(&mut term, TermManager::setup, TermManager::restore, |term| {
        let audio = TerminalBell::new(settings.bell);
        let clock = FrameLimiter::from_fps(settings.fps);

        SnakeGame::new(term, audio, clock, geometry, StdRng::from_entropy()).play()
    })
}

/// Runs `body` between `setup` and `restore`. `restore` runs even when
/// `setup` or `body` fails, and the first error is the one returned.
fn in_session<S, T>(
    state: &mut S,
    setup: impl FnOnce(&mut S) -> Result<()>,
    restore: impl FnOnce(&mut S) -> Result<()>,
    body: impl FnOnce(&mut S) -> Result<T>,
) -> Result<T> {
    let result = setup(state).and_then(|()| body(state));
    let restored = restore(state);
    result.and_then(|value| restored.map(|()| value))
}
