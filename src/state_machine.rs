use crate::{
    model::{FileCandidate, FormState, RenderSnapshot, SubmissionStatus},
    services::Notifier,
    settings::FormSettings,
    synthesis::VoiceSynthesizer,
    validate::{self, FileError, TextError},
};

const SUCCESS_MESSAGE: &str = "Voice synthesis completed successfully!";
const FAILURE_MESSAGE: &str = "An error occurred during voice synthesis";

/// Validation-gated submission controller. The presentation layer forwards
/// its three events here and re-renders from `snapshot()` after each one.
pub struct FormStateMachine {
    pub state: FormState,
    settings: FormSettings,
    synthesizer: Box<dyn VoiceSynthesizer>,
    notifier: Box<dyn Notifier>,
}

impl FormStateMachine {
    pub fn new(
        settings: FormSettings,
        synthesizer: Box<dyn VoiceSynthesizer>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            state: FormState::default(),
            settings,
            synthesizer,
            notifier,
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot(self.settings.max_text_chars)
    }

    /// A cleared file picker reports `None`; that changes nothing. A real
    /// selection either replaces the stored file or surfaces an error while
    /// the previous file stays put.
    pub fn file_selected(&mut self, candidate: Option<FileCandidate>) {
        let Some(candidate) = candidate else {
            return;
        };
        match validate::validate_file(&candidate, &self.settings) {
            Ok(file) => {
                self.state.file = Some(file);
                self.state.file_error = None;
            }
            Err(err) => self.state.file_error = Some(err),
        }
    }

    /// An over-long edit is discarded whole; the field keeps its last
    /// accepted value.
    pub fn text_changed(&mut self, candidate: &str) {
        match validate::validate_text(candidate, &self.settings) {
            Ok(text) => {
                self.state.text = text;
                self.state.text_error = None;
            }
            Err(err) => self.state.text_error = Some(err),
        }
    }

    /// Re-checks the current state rather than trusting the error fields,
    /// then runs the synthesis call to settlement. File errors take
    /// precedence over text errors. Once Submitting, further submits are
    /// no-ops until the call settles; there is no cancellation.
    pub async fn submit(&mut self) {
        if self.state.status == SubmissionStatus::Submitting {
            return;
        }
        let Some(file) = self.state.file.clone() else {
            self.state.file_error = Some(FileError::Missing);
            return;
        };
        if self.state.text.trim().is_empty() {
            self.state.text_error = Some(TextError::Empty);
            return;
        }
        let text = self.state.text.clone();

        self.state.status = SubmissionStatus::Submitting;
        match self.synthesizer.synthesize(&file, &text).await {
            Ok(()) => self.notifier.notify_success(SUCCESS_MESSAGE),
            Err(err) => {
                log::error!("synthesis failed: {err:#}");
                self.notifier.notify_failure(FAILURE_MESSAGE);
            }
        }
        self.state.status = SubmissionStatus::Idle;
    }
}
