// Dashboard session
//
// Owns every piece of session state and exposes the operations the UI shell
// calls. Renderers subscribe to change events or pull a snapshot.

mod access;
mod audio;
mod event;
mod session;
mod voice;

pub use access::{Role, Section, UnknownRole};
pub use audio::{AudioCue, LogChime};
pub use event::{DashboardEvent, DashboardSnapshot, TickReport};
pub use session::{Dashboard, SharedDashboard};
pub use voice::{route_transcript, speech_error_message, VoiceRoute, SPEECH_UNSUPPORTED};
