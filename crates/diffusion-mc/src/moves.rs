use diffusion_core::{Density, RngHandle};
use serde::{Deserialize, Serialize};

/// Result of a single-particle hop proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopProposal {
    /// Candidate configuration produced by the move.
    pub candidate: Density,
    /// Site the particle was taken from.
    pub site: usize,
    /// Site the particle landed on. Equal to `site` for the defensive
    /// no-op branch.
    pub destination: usize,
}

impl HopProposal {
    /// Whether the proposal left the configuration unchanged.
    pub fn is_noop(&self) -> bool {
        self.site == self.destination
    }

    /// Human readable description of the move.
    pub fn description(&self) -> String {
        if self.is_noop() {
            format!("hop:noop@{}", self.site)
        } else {
            format!("hop:{}->{}", self.site, self.destination)
        }
    }
}

/// Selects one particle uniformly among all placed particles.
///
/// Draws a uniform index below the total particle count and walks the
/// cumulative occupancy to find the owning site, so a site is chosen with
/// probability proportional to its occupancy rather than uniformly per site.
fn select_agent(density: &Density, rng: &mut RngHandle) -> usize {
    let particle = rng.next_index(density.total());
    let mut cumulative = 0u64;
    for (site, &occupancy) in density.sites().iter().enumerate() {
        cumulative += u64::from(occupancy);
        if cumulative > particle {
            return site;
        }
    }
    // Unreachable while total() > 0; the walk must cross `particle`.
    density.len() - 1
}

/// Proposes moving one particle to an adjacent site.
///
/// The leftmost site can only hop right and the rightmost only left;
/// interior sites choose a direction uniformly. The input is never mutated:
/// the candidate is a fresh configuration with one unit moved, conserving
/// the total particle count.
pub fn propose_hop(density: &Density, rng: &mut RngHandle) -> HopProposal {
    if density.total() == 0 {
        return HopProposal {
            candidate: density.clone(),
            site: 0,
            destination: 0,
        };
    }
    let site = select_agent(density, rng);
    if density[site] == 0 {
        // Inconsistent selection state; hand back an unchanged copy
        // instead of underflowing the occupancy.
        return HopProposal {
            candidate: density.clone(),
            site,
            destination: site,
        };
    }

    let destination = if site == 0 {
        site + 1
    } else if site == density.len() - 1 {
        site - 1
    } else if rng.next_index(2) == 0 {
        site - 1
    } else {
        site + 1
    };

    let mut sites = density.sites().to_vec();
    sites[site] -= 1;
    sites[destination] += 1;
    HopProposal {
        candidate: Density::new(sites),
        site,
        destination,
    }
}

/// Source of move proposals consumed by the sampler's run loop.
///
/// The seam exists so runs can be exercised with scripted proposals in
/// tests; production code uses [`RandomHops`].
pub trait MoveSource {
    /// Produces the next candidate configuration for the given state.
    fn propose(&mut self, density: &Density) -> HopProposal;
}

/// Production move source drawing hops from an owned RNG stream.
#[derive(Debug, Clone)]
pub struct RandomHops {
    rng: RngHandle,
}

impl RandomHops {
    /// Wraps an existing RNG handle.
    pub fn new(rng: RngHandle) -> Self {
        Self { rng }
    }

    /// Convenience constructor seeding a fresh stream.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RngHandle::from_seed(seed))
    }
}

impl MoveSource for RandomHops {
    fn propose(&mut self, density: &Density) -> HopProposal {
        propose_hop(density, &mut self.rng)
    }
}
