use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::settings::FormSettings;

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<FormSettings> {
        if !self.path.exists() {
            return Ok(FormSettings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading settings file {}", self.path.display()))?;
        let settings: FormSettings =
            serde_json::from_str(&raw).context("failed parsing settings json")?;
        Ok(settings)
    }

    pub fn save(&self, settings: &FormSettings) -> Result<()> {
        let Some(parent) = self.path.parent() else {
            anyhow::bail!("settings path has no parent")
        };
        fs::create_dir_all(parent)?;
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
