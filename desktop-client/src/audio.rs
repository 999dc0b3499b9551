use common::games::{SoundCue, SoundPlayer};
use common::{log, log_warn};
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::AudioConfig;

const MUSIC_FILE: &str = "bgm.mp3";
const LEVEL_UP_FILE: &str = "levelup.mp3";
const GAME_OVER_FILE: &str = "gameover.wav";

const BEEP_FREQUENCY_HZ: f32 = 440.0;
const BEEP_DURATION: Duration = Duration::from_millis(100);
const BEEP_VOLUME: f32 = 0.2;

enum Output {
    Unopened,
    Open {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    },
    Unavailable,
}

/// rodio-backed player. `OutputStream` is not `Send`, so this lives on the game thread.
/// A missing device or asset turns the matching sound into a no-op.
pub struct AudioPlayer {
    output: Output,
    assets_dir: PathBuf,
    music_volume: f32,
    music: Option<Sink>,
    music_on: bool,
    level_up_clip: Option<Vec<u8>>,
    game_over_clip: Option<Vec<u8>>,
}

impl AudioPlayer {
    pub fn new(config: &AudioConfig) -> Self {
        let assets_dir = PathBuf::from(&config.assets_dir);
        let mut player = Self {
            output: Output::Unopened,
            level_up_clip: load_clip(&assets_dir.join(LEVEL_UP_FILE)),
            game_over_clip: load_clip(&assets_dir.join(GAME_OVER_FILE)),
            assets_dir,
            music_volume: config.music_volume,
            music: None,
            music_on: false,
        };
        if config.enabled_on_start {
            player.toggle_music();
        }
        player
    }

    fn handle(&mut self) -> Option<&OutputStreamHandle> {
        if let Output::Unopened = self.output {
            self.output = match OutputStream::try_default() {
                Ok((stream, handle)) => Output::Open {
                    _stream: stream,
                    handle,
                },
                Err(e) => {
                    log_warn!("No audio output, sound disabled: {}", e);
                    Output::Unavailable
                }
            };
        }
        match &self.output {
            Output::Open { handle, .. } => Some(handle),
            Output::Unopened | Output::Unavailable => None,
        }
    }

    fn start_music(&mut self) -> Option<Sink> {
        let path = self.assets_dir.join(MUSIC_FILE);
        let file = File::open(&path).ok()?;
        let source = match Decoder::new_looped(BufReader::new(file)) {
            Ok(source) => source,
            Err(e) => {
                log_warn!("Cannot decode {}: {}", path.display(), e);
                return None;
            }
        };
        let volume = self.music_volume;
        let sink = Sink::try_new(self.handle()?).ok()?;
        sink.set_volume(volume);
        sink.append(source);
        Some(sink)
    }

    fn play_clip(&mut self, clip: Option<Vec<u8>>) -> bool {
        let Some(bytes) = clip else {
            return false;
        };
        let Some(handle) = self.handle() else {
            return false;
        };
        let Ok(sink) = Sink::try_new(handle) else {
            return false;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes)) else {
            return false;
        };
        sink.append(source);
        sink.detach();
        true
    }

    fn play_beep(&mut self) {
        let Some(handle) = self.handle() else {
            return;
        };
        let Ok(sink) = Sink::try_new(handle) else {
            return;
        };
        sink.append(
            SineWave::new(BEEP_FREQUENCY_HZ)
                .take_duration(BEEP_DURATION)
                .amplify(BEEP_VOLUME),
        );
        sink.detach();
    }
}

impl SoundPlayer for AudioPlayer {
    fn play(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::LevelUp => {
                if !self.play_clip(self.level_up_clip.clone()) {
                    self.play_beep();
                }
            }
            SoundCue::GameOver => {
                self.play_clip(self.game_over_clip.clone());
            }
        }
    }

    fn toggle_music(&mut self) -> bool {
        self.music_on = !self.music_on;
        if self.music_on && self.music.is_none() {
            self.music = self.start_music();
        }
        if let Some(music) = &self.music {
            if self.music_on {
                music.play();
            } else {
                music.pause();
            }
        }
        self.music_on
    }
}

fn load_clip(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(_) => {
            log!("Sound asset {} not found", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_clip_loads_as_none() {
        assert_eq!(load_clip(Path::new("no_such_dir_8c1f/levelup.mp3")), None);
    }

    #[test]
    fn test_existing_clip_is_read() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("snake_clip_test_{}.wav", random_number));
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        assert_eq!(load_clip(&path), Some(vec![1, 2, 3]));

        std::fs::remove_file(path).unwrap();
    }
}
