use super::Section;
use crate::i18n::Translator;

/// Shown when the platform has no speech recognition
pub const SPEECH_UNSUPPORTED: &str = "Speech Recognition not supported in this browser.";

/// Where a recognized transcript sends the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceRoute {
    pub section: Section,
    /// Notification announcing the navigation
    pub message: String,
}

/// Match a transcript against the known voice commands.
///
/// Case-insensitive substring match; "assign task" wins over
/// "robot status" when both appear.
pub fn route_transcript(transcript: &str) -> Option<VoiceRoute> {
    let lowered = transcript.to_lowercase();

    if lowered.contains("assign task") {
        Some(VoiceRoute {
            section: Section::Task,
            message: format!(
                "Voice command received: \"{}\". Navigating to Task Panel.",
                transcript
            ),
        })
    } else if lowered.contains("robot status") {
        Some(VoiceRoute {
            section: Section::Delivery,
            message: format!(
                "Voice command received: \"{}\". Checking robot statuses.",
                transcript
            ),
        })
    } else {
        None
    }
}

/// Display string for a recognition error
pub fn speech_error_message(translator: &Translator, error: &str) -> String {
    format!(
        "{}: {}. {}",
        translator.t("Error"),
        error,
        translator.t("PleaseTryAgain")
    )
}
