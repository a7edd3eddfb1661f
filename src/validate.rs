use thiserror::Error;

use crate::{
    model::{FileCandidate, SelectedFile},
    settings::FormSettings,
};

/// Why a file selection was rejected. `Display` is the message shown inline
/// next to the file input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("File size must be less than 5MB")]
    TooLarge,
    #[error("Only .wav and .mp3 files are supported")]
    UnsupportedType,
    #[error("Please upload a voice file")]
    Missing,
}

/// Why a text candidate was rejected, shown inline next to the text input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Text must be 500 characters or less")]
    TooLong,
    #[error("Please enter some text")]
    Empty,
}

/// Validate a selected file against the size and media-type constraints.
/// Size is checked first so an oversized file of the wrong type reports the
/// size error. An empty media type is not in the accepted set and is
/// rejected like any other unsupported type.
pub fn validate_file(
    candidate: &FileCandidate,
    settings: &FormSettings,
) -> Result<SelectedFile, FileError> {
    if candidate.size > settings.max_file_bytes {
        return Err(FileError::TooLarge);
    }
    if !settings
        .accepted_media_types
        .iter()
        .any(|accepted| accepted == &candidate.media_type)
    {
        return Err(FileError::UnsupportedType);
    }
    Ok(SelectedFile {
        name: candidate.name.clone(),
        size: candidate.size,
        media_type: candidate.media_type.clone(),
    })
}

/// Validate a text edit. An over-long candidate is rejected whole, not
/// truncated; the caller keeps the previously accepted value. Anything
/// within the limit is accepted verbatim, whitespace included.
pub fn validate_text(candidate: &str, settings: &FormSettings) -> Result<String, TextError> {
    if candidate.chars().count() > settings.max_text_chars {
        return Err(TextError::TooLong);
    }
    Ok(candidate.to_string())
}
