use anyhow::Result;
use tracing::info;

/// Plays the short delivery-complete tone.
///
/// Implementations may fail (no audio device, autoplay blocked); callers log
/// and swallow the error.
pub trait AudioCue: Send {
    fn play_tone(&self) -> Result<()>;
}

/// Default cue that records the tone in the log instead of synthesizing it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogChime;

impl AudioCue for LogChime {
    fn play_tone(&self) -> Result<()> {
        info!(note = "C4", duration = "8n", "Delivery chime");
        Ok(())
    }
}
