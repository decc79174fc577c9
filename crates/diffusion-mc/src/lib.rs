#![deny(missing_docs)]
#![doc = include_str!("../docs/sampler-api.md")]

//! Deterministic Metropolis sampler for the 1-D diffusion model.

/// Metropolis acceptance rule and probability helpers.
pub mod acceptance;
/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Energy models for density configurations.
pub mod energy;
/// Top-level `run`/`execute` entry points and run summaries.
pub mod kernel;
/// Run manifest serialization helpers.
pub mod manifest;
/// Single-particle hop proposal utilities.
pub mod moves;
/// The sampler state machine.
pub mod sampler;
/// Trace collection and energy statistics.
pub mod trace;

pub use acceptance::{acceptance_probability, AcceptanceRule, Metropolis};
pub use config::{OutputConfig, RunConfig, SeedPolicy, TraceConfig};
pub use energy::{interaction_energy, EnergyModel, InteractionEnergy};
pub use kernel::{execute, run, RunSummary};
pub use manifest::RunManifest;
pub use moves::{propose_hop, HopProposal, MoveSource, RandomHops};
pub use sampler::Sampler;
pub use trace::{TraceRecorder, TraceSample, TraceSummary};
