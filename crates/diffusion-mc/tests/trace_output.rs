use std::fs;
use std::path::PathBuf;

use diffusion_mc::{run, OutputConfig, RunConfig, RunManifest, SeedPolicy, TraceConfig};

fn traced_config(run_dir: PathBuf) -> RunConfig {
    RunConfig {
        temperature: 0.5,
        max_iterations: 8,
        seed_policy: SeedPolicy {
            master_seed: 11,
            label: Some("trace-test".into()),
        },
        trace: TraceConfig { interval: 1 },
        output: OutputConfig {
            run_directory: Some(run_dir),
            ..OutputConfig::default()
        },
        ..RunConfig::default()
    }
}

#[test]
fn traced_run_writes_csv_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let config = traced_config(dir.path().join("run"));

    let summary = run(&config, vec![0, 3, 0]).unwrap();

    assert_eq!(summary.samples.len(), 8);
    assert_eq!(summary.trace_summary.samples, 8);

    let trace_path = summary.trace_path.as_ref().expect("trace file written");
    let text = fs::read_to_string(trace_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "iteration,energy,accepted,total_accepted");
    assert_eq!(lines.len(), 9, "header plus one row per sample");

    let manifest_path = summary.manifest_path.as_ref().expect("manifest written");
    let manifest = RunManifest::load(manifest_path).unwrap();
    assert_eq!(manifest.final_energy, summary.final_energy);
    assert_eq!(manifest.final_density, summary.final_density);
    assert_eq!(manifest.master_seed, 11);
    assert_eq!(manifest.seed_label.as_deref(), Some("trace-test"));
    assert_eq!(manifest.trace_file, Some(PathBuf::from("trace.csv")));
    assert_eq!(manifest.proposed, 8);
}

#[test]
fn disabled_trace_still_emits_a_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = traced_config(dir.path().join("run"));
    config.trace = TraceConfig { interval: 0 };

    let summary = run(&config, vec![0, 3, 0]).unwrap();

    assert!(summary.samples.is_empty());
    assert!(summary.trace_path.is_none());
    let manifest = RunManifest::load(summary.manifest_path.as_ref().unwrap()).unwrap();
    assert_eq!(manifest.trace_file, None);
}

#[test]
fn trace_interval_thins_the_samples() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = traced_config(dir.path().join("run"));
    config.max_iterations = 10;
    config.trace = TraceConfig { interval: 3 };

    let summary = run(&config, vec![0, 3, 0]).unwrap();
    // Iterations 3, 6, and 9 are recorded.
    assert_eq!(summary.samples.len(), 3);
    assert_eq!(summary.samples[0].iteration, 2);
    assert_eq!(summary.samples[2].iteration, 8);
}

#[test]
fn no_run_directory_means_no_artefacts() {
    let mut config = RunConfig::default();
    config.max_iterations = 4;
    config.temperature = 0.5;
    let summary = run(&config, vec![1, 1]).unwrap();
    assert!(summary.trace_path.is_none());
    assert!(summary.manifest_path.is_none());
}
