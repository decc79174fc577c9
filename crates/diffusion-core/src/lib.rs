#![deny(missing_docs)]
#![doc = "Core types shared by the diffusion sampler crates: occupancy densities, structured errors, and the deterministic RNG policy."]

pub mod density;
pub mod errors;
pub mod rng;

pub use density::Density;
pub use errors::{DiffusionError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};
