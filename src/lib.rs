//! Core of a voice-synthesis submission form: input validation, an
//! Idle/Submitting state machine, and an abstract asynchronous synthesis
//! boundary. The presentation layer lives elsewhere; it forwards file, text
//! and submit events in and renders from [`model::RenderSnapshot`].

pub mod model;
pub mod services;
pub mod settings;
pub mod state_machine;
pub mod store;
pub mod synthesis;
pub mod validate;

pub use model::{FileCandidate, FormState, RenderSnapshot, SelectedFile, SubmissionStatus};
pub use services::{LogNotifier, Notifier};
pub use settings::FormSettings;
pub use state_machine::FormStateMachine;
pub use store::SettingsStore;
pub use synthesis::{PlaceholderSynthesizer, VoiceSynthesizer};
pub use validate::{validate_file, validate_text, FileError, TextError};
