use std::path::PathBuf;

use diffusion_core::{Density, DiffusionError, ErrorInfo};

use crate::config::RunConfig;
use crate::energy::{EnergyModel, InteractionEnergy};
use crate::manifest::RunManifest;
use crate::sampler::Sampler;
use crate::trace::{TraceRecorder, TraceSample, TraceSummary};

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Final cached energy.
    pub final_energy: f64,
    /// Final configuration.
    pub final_density: Density,
    /// Number of proposals issued.
    pub proposed: usize,
    /// Number of proposals accepted.
    pub accepted: usize,
    /// Fraction of proposals accepted.
    pub acceptance_rate: f64,
    /// Aggregate statistics over the recorded trace.
    pub trace_summary: TraceSummary,
    /// Trace samples collected (useful for tests/diagnostics).
    pub samples: Vec<TraceSample>,
    /// Trace CSV written during the run.
    pub trace_path: Option<PathBuf>,
    /// Manifest path, if emitted.
    pub manifest_path: Option<PathBuf>,
}

/// Runs the sampler with the built-in interaction energy model.
pub fn run(config: &RunConfig, initial: Vec<u32>) -> Result<RunSummary, DiffusionError> {
    let model = InteractionEnergy::new(config.coefficient)?;
    execute(config, model, initial)
}

/// Runs the sampler with a caller-supplied energy model, wiring the
/// configured trace and manifest outputs.
pub fn execute<E: EnergyModel>(
    config: &RunConfig,
    energy_model: E,
    initial: Vec<u32>,
) -> Result<RunSummary, DiffusionError> {
    config.validate()?;
    let mut sampler = Sampler::new(energy_model, initial, config)?;
    let mut recorder = TraceRecorder::new();

    for iteration in 0..config.max_iterations {
        let accepted = sampler.advance();
        if config.trace.interval > 0 && (iteration + 1) % config.trace.interval == 0 {
            recorder.push_sample(TraceSample {
                iteration,
                energy: sampler.current_energy(),
                accepted,
                total_accepted: sampler.accepted(),
            });
        }
    }

    let (trace_path, manifest_path) = write_outputs(config, &sampler, &recorder)?;

    Ok(RunSummary {
        final_energy: sampler.current_energy(),
        final_density: sampler.density().clone(),
        proposed: sampler.proposed(),
        accepted: sampler.accepted(),
        acceptance_rate: sampler.acceptance_rate(),
        trace_summary: recorder.summary(),
        samples: recorder.samples().to_vec(),
        trace_path,
        manifest_path,
    })
}

fn write_outputs<E, M, A>(
    config: &RunConfig,
    sampler: &Sampler<E, M, A>,
    recorder: &TraceRecorder,
) -> Result<(Option<PathBuf>, Option<PathBuf>), DiffusionError>
where
    E: EnergyModel,
    M: crate::moves::MoveSource,
    A: crate::acceptance::AcceptanceRule,
{
    let run_dir = match &config.output.run_directory {
        Some(dir) => dir.clone(),
        None => return Ok((None, None)),
    };
    std::fs::create_dir_all(&run_dir).map_err(|err| {
        DiffusionError::Serde(
            ErrorInfo::new("run-dir-create", err.to_string())
                .with_context("path", run_dir.display().to_string()),
        )
    })?;

    let trace_path = if config.trace.interval > 0 {
        let path = run_dir.join(&config.output.trace_file);
        recorder.write_csv(&path).map_err(|err| {
            DiffusionError::Serde(
                ErrorInfo::new("trace-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Some(path)
    } else {
        None
    };

    let manifest_path = run_dir.join(&config.output.manifest_file);
    let manifest = RunManifest {
        config: config.clone(),
        master_seed: config.seed_policy.master_seed,
        seed_label: config.seed_policy.label.clone(),
        final_energy: sampler.current_energy(),
        final_density: sampler.density().clone(),
        accepted: sampler.accepted(),
        proposed: sampler.proposed(),
        trace_file: trace_path
            .as_ref()
            .and_then(|path| path.strip_prefix(&run_dir).ok())
            .map(|rel| rel.to_path_buf()),
    };
    manifest.write(&manifest_path)?;

    Ok((trace_path, Some(manifest_path)))
}
