//! Intake configuration.
//!
//! Two deployment variants exist: a form where the submitter picks
//! category and severity from closed lists, and a form where both are
//! inferred from the description. The mode decides both the classifier
//! strategy and the column layout of the backing file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeMode {
    FixedChoice,
    Inferred,
}

impl IntakeMode {
    /// Default backing file name for each variant.
    pub fn default_data_file(self) -> &'static str {
        match self {
            IntakeMode::FixedChoice => "complaints.csv",
            IntakeMode::Inferred => "complaints_ai.csv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    pub data_file: PathBuf,
    pub mode: IntakeMode,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        let mode = IntakeMode::Inferred;
        Self {
            data_file: PathBuf::from(mode.default_data_file()),
            mode,
        }
    }
}

impl IntakeConfig {
    /// Load from a JSON file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
