use crate::validate::{FileError, TextError};

/// Status of the submission state machine. The form is either waiting for
/// input or a synthesis call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Submitting => "Submitting",
        }
    }
}

/// A file selection as reported by the presentation layer, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

/// A validated voice file. Only a descriptor; the bytes stay with the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

/// Everything a rendered form instance holds. Created empty at mount,
/// mutated only through the state machine's event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub file: Option<SelectedFile>,
    pub text: String,
    pub file_error: Option<FileError>,
    pub text_error: Option<TextError>,
    pub status: SubmissionStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            file: None,
            text: String::new(),
            file_error: None,
            text_error: None,
            status: SubmissionStatus::Idle,
        }
    }
}

impl FormState {
    /// Accepted text length in characters. The counter never reflects a
    /// rejected candidate.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn snapshot(&self, max_text_chars: usize) -> RenderSnapshot {
        let submitting = self.status == SubmissionStatus::Submitting;
        RenderSnapshot {
            char_counter: format!("{}/{} characters", self.text_len(), max_text_chars),
            submit_label: if submitting {
                "Synthesizing..."
            } else {
                "Synthesize Voice"
            },
            submit_enabled: !submitting,
            file_error: self.file_error.as_ref().map(ToString::to_string),
            text_error: self.text_error.as_ref().map(ToString::to_string),
        }
    }
}

/// Derived view of the current state, handed to the presentation layer on
/// every re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub char_counter: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub file_error: Option<String>,
    pub text_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_form_snapshot() {
        let snap = FormState::default().snapshot(500);
        assert_eq!(snap.char_counter, "0/500 characters");
        assert_eq!(snap.submit_label, "Synthesize Voice");
        assert!(snap.submit_enabled);
        assert_eq!(snap.file_error, None);
        assert_eq!(snap.text_error, None);
    }

    #[test]
    fn submitting_disables_the_trigger() {
        let state = FormState {
            status: SubmissionStatus::Submitting,
            ..FormState::default()
        };
        let snap = state.snapshot(500);
        assert_eq!(snap.submit_label, "Synthesizing...");
        assert!(!snap.submit_enabled);
    }

    #[test]
    fn counter_counts_characters_not_bytes() {
        let state = FormState {
            text: "héllo".to_string(),
            ..FormState::default()
        };
        assert_eq!(state.snapshot(500).char_counter, "5/500 characters");
    }
}
