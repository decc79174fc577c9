use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Per-iteration trace sample stored for CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSample {
    /// Iteration number when the sample was recorded.
    pub iteration: usize,
    /// Cached energy after the iteration.
    pub energy: f64,
    /// Whether the iteration's proposal was accepted.
    pub accepted: bool,
    /// Running count of accepted proposals.
    pub total_accepted: usize,
}

/// Aggregate summary over the recorded energies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSummary {
    /// Number of samples recorded.
    pub samples: usize,
    /// Mean energy over the recorded samples.
    pub mean_energy: f64,
    /// Variance of the recorded energy values.
    pub energy_variance: f64,
}

impl TraceSummary {
    /// Returns an empty summary descriptor.
    pub fn empty() -> Self {
        Self {
            samples: 0,
            mean_energy: 0.0,
            energy_variance: 0.0,
        }
    }
}

/// Collects per-iteration samples and computes aggregate energy statistics.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    samples: Vec<TraceSample>,
}

impl TraceRecorder {
    /// Creates a new recorder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a trace sample.
    pub fn push_sample(&mut self, sample: TraceSample) {
        self.samples.push(sample);
    }

    /// Returns an immutable view over the recorded samples.
    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    /// Computes the summary statistics of the recorded energies.
    pub fn summary(&self) -> TraceSummary {
        if self.samples.is_empty() {
            return TraceSummary::empty();
        }
        let energies: Vec<f64> = self.samples.iter().map(|sample| sample.energy).collect();
        let mean_energy = energies.iter().sum::<f64>() / energies.len() as f64;
        let variance = if energies.len() > 1 {
            let mean_sq = energies.iter().map(|&e| e * e).sum::<f64>() / energies.len() as f64;
            (mean_sq - mean_energy * mean_energy).max(0.0)
        } else {
            0.0
        };
        TraceSummary {
            samples: self.samples.len(),
            mean_energy,
            energy_variance: variance,
        }
    }

    /// Writes the recorded samples to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(file, "iteration,energy,accepted,total_accepted")?;
        for sample in &self.samples {
            writeln!(
                file,
                "{},{:.6},{},{}",
                sample.iteration, sample.energy, sample.accepted, sample.total_accepted
            )?;
        }
        Ok(())
    }
}
