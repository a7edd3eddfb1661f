use std::time::Duration;

use anyhow::Result;

use crate::{model::SelectedFile, settings::FormSettings};

/// Boundary to the synthesis backend. The controller only needs one opaque
/// asynchronous call; success or failure is the whole contract.
#[async_trait::async_trait]
pub trait VoiceSynthesizer: Send + Sync {
    fn display_name(&self) -> &'static str;
    async fn synthesize(&self, file: &SelectedFile, text: &str) -> Result<()>;
}

/// Stand-in for the real backend: waits a fixed delay, logs what would have
/// been sent, always succeeds.
pub struct PlaceholderSynthesizer {
    delay: Duration,
}

impl PlaceholderSynthesizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_settings(settings: &FormSettings) -> Self {
        Self::new(Duration::from_millis(settings.placeholder_delay_ms))
    }
}

impl Default for PlaceholderSynthesizer {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait::async_trait]
impl VoiceSynthesizer for PlaceholderSynthesizer {
    fn display_name(&self) -> &'static str {
        "Placeholder (simulated)"
    }

    async fn synthesize(&self, file: &SelectedFile, text: &str) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        log::info!(
            "simulated synthesis: file {} ({} bytes, {}), {} characters of text",
            file.name,
            file.size,
            file.media_type,
            text.chars().count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn placeholder_succeeds_after_its_delay() {
        let synthesizer = PlaceholderSynthesizer::from_settings(&FormSettings::default());
        let file = SelectedFile {
            name: "voice.wav".to_string(),
            size: 1024,
            media_type: "audio/wav".to_string(),
        };
        let started = tokio::time::Instant::now();
        synthesizer
            .synthesize(&file, "hello")
            .await
            .expect("placeholder never fails");
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
    }
}
