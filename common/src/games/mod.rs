mod broadcaster;
mod session_rng;
mod sound;

pub mod snake;

pub use broadcaster::GameBroadcaster;
pub use session_rng::{RandomSource, SessionRng};
pub use sound::{SilentSoundPlayer, SoundCue, SoundPlayer};

#[cfg(test)]
pub(crate) use session_rng::scripted::ScriptedRng;
