#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    LevelUp,
    GameOver,
}

/// Audio boundary. Missing devices or assets must degrade to silence, never to an error.
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);

    /// Flips background music on or off and returns the new state.
    fn toggle_music(&mut self) -> bool;
}

#[derive(Default)]
pub struct SilentSoundPlayer {
    music_on: bool,
    played: Vec<SoundCue>,
}

impl SilentSoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[SoundCue] {
        &self.played
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }
}

impl SoundPlayer for SilentSoundPlayer {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }

    fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        self.music_on
    }
}
