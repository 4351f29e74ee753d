use std::io::{stdout, Write};

use tracing::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sound {
    Move,
    Eat,
    GameOver,
}

/// Fire-and-forget game sounds.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

// Rings the terminal bell when food is eaten and when the game ends
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        TerminalBell { enabled }
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, sound: Sound) {
        debug!(?sound, "sound");

        if self.enabled && sound != Sound::Move {
            let mut out = stdout();
            // Nobody waits on a bell, a failed write is dropped
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }
    }
}
