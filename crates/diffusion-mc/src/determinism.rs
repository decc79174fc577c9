use diffusion_core::derive_substream_seed;

const MOVE_STREAM: u64 = 0;
const ACCEPTANCE_STREAM: u64 = 1;

/// Derives the deterministic seed for the move-proposal stream.
pub fn move_stream_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, MOVE_STREAM)
}

/// Derives the deterministic seed for the acceptance-draw stream.
///
/// Kept disjoint from the move stream so proposal randomness and acceptance
/// draws are independently replayable.
pub fn acceptance_stream_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, ACCEPTANCE_STREAM)
}
