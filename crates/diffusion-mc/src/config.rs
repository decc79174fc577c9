use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use diffusion_core::{DiffusionError, ErrorInfo};

/// YAML-configurable parameters governing one sampler run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Temperature of the Metropolis criterion. Must be strictly positive.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Number of propose/accept cycles per run.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Coefficient of the built-in interaction energy model.
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Trace sampling behaviour.
    #[serde(default)]
    pub trace: TraceConfig,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_temperature() -> f64 {
    1.0
}

fn default_max_iterations() -> usize {
    1000
}

fn default_coefficient() -> f64 {
    1.0
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            max_iterations: default_max_iterations(),
            coefficient: default_coefficient(),
            seed_policy: SeedPolicy::default(),
            trace: TraceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, DiffusionError> {
        serde_yaml::from_str(text).map_err(|err| {
            DiffusionError::Serde(ErrorInfo::new("config-parse", err.to_string()))
        })
    }

    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, DiffusionError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            DiffusionError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            DiffusionError::Serde(info) => {
                DiffusionError::Serde(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Applies the domain checks eagerly, before a sampler is built.
    pub fn validate(&self) -> Result<(), DiffusionError> {
        if self.temperature == 0.0 {
            return Err(DiffusionError::Unsupported(ErrorInfo::new(
                "zero-temperature",
                "zero temperature dynamics not implemented",
            )));
        }
        if self.temperature < 0.0 {
            return Err(DiffusionError::Parameter(
                ErrorInfo::new("negative-temperature", "temperature must be strictly positive")
                    .with_context("temperature", self.temperature.to_string()),
            ));
        }
        if self.coefficient < 0.0 {
            return Err(DiffusionError::Parameter(
                ErrorInfo::new("negative-coefficient", "energy coefficient must be non-negative")
                    .with_context("coefficient", self.coefficient.to_string()),
            ));
        }
        Ok(())
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when documenting substream seeds in manifests.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// Trace sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    /// Interval in iterations between trace samples (0 disables tracing).
    #[serde(default)]
    pub interval: usize,
}

/// Output directory layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for run artefacts. Created if it does not exist.
    #[serde(default)]
    pub run_directory: Option<PathBuf>,
    /// Trace filename relative to `run_directory`.
    #[serde(default = "default_trace_filename")]
    pub trace_file: PathBuf,
    /// Manifest filename relative to `run_directory`.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_trace_filename() -> PathBuf {
    PathBuf::from("trace.csv")
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_directory: None,
            trace_file: default_trace_filename(),
            manifest_file: default_manifest_filename(),
        }
    }
}
