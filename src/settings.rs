use serde::{Deserialize, Serialize};

/// Form limits and the placeholder delay. Defaults mirror the original
/// form's hard-coded constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    pub max_file_bytes: u64,
    pub max_text_chars: usize,
    pub accepted_media_types: Vec<String>,
    pub placeholder_delay_ms: u64,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_text_chars: 500,
            accepted_media_types: vec!["audio/wav".to_string(), "audio/mpeg".to_string()],
            placeholder_delay_ms: 2000,
        }
    }
}
