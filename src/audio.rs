//! Audio cues
//!
//! The simulation only decides when a sound should play. A shell drains the
//! cues every frame and hands them to an [`AudioSink`].

use serde::{Deserialize, Serialize};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Player bolt launched
    ShipFired,
    /// Ship destroyed by an alien bolt
    ShipHit,
    /// Alien destroyed by a player bolt
    AlienDestroyed,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::ShipFired => "ship-fired",
            SoundCue::ShipHit => "ship-hit",
            SoundCue::AlienDestroyed => "alien-destroyed",
        }
    }
}

/// Something that can play cues
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);

    fn play_all(&mut self, cues: impl IntoIterator<Item = SoundCue>)
    where
        Self: Sized,
    {
        for cue in cues {
            self.play(cue);
        }
    }
}

/// Sink that logs every cue and keeps a tally, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio {
    pub fired: u32,
    pub hits: u32,
    pub destroyed: u32,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.fired + self.hits + self.destroyed
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("cue: {}", cue.as_str());
        match cue {
            SoundCue::ShipFired => self.fired += 1,
            SoundCue::ShipHit => self.hits += 1,
            SoundCue::AlienDestroyed => self.destroyed += 1,
        }
    }
}
