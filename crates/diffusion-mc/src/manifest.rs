use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use diffusion_core::{Density, DiffusionError, ErrorInfo};

use crate::config::RunConfig;

/// Record tying a run's outputs to its exact inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    /// Configuration the run was executed with.
    pub config: RunConfig,
    /// Master seed used for all randomness.
    pub master_seed: u64,
    /// Optional seed label copied from the seed policy.
    pub seed_label: Option<String>,
    /// Final cached energy.
    pub final_energy: f64,
    /// Final configuration.
    pub final_density: Density,
    /// Number of accepted proposals.
    pub accepted: usize,
    /// Number of proposals issued.
    pub proposed: usize,
    /// Trace file written during the run, relative to the run directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_file: Option<PathBuf>,
}

impl RunManifest {
    /// Serializes the manifest as pretty JSON to the given path.
    pub fn write(&self, path: &Path) -> Result<(), DiffusionError> {
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            DiffusionError::Serde(ErrorInfo::new("manifest-serialize", err.to_string()))
        })?;
        std::fs::write(path, json).map_err(|err| {
            DiffusionError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DiffusionError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            DiffusionError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&text).map_err(|err| {
            DiffusionError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}
