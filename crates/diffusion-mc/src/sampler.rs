use diffusion_core::{Density, DiffusionError, RngHandle};

use crate::acceptance::{AcceptanceRule, Metropolis};
use crate::config::RunConfig;
use crate::determinism;
use crate::energy::EnergyModel;
use crate::moves::{HopProposal, MoveSource, RandomHops};

/// One Metropolis diffusion run: owned configuration, cached energy, and
/// the iteration budget applied per [`Sampler::run`] call.
///
/// Strictly single-threaded and sequential. The cached energy is replaced
/// only together with the configuration, so it always describes the current
/// state. Calling `run` again continues from where the previous call left
/// off; nothing is reset.
pub struct Sampler<E, M = RandomHops, A = Metropolis>
where
    E: EnergyModel,
    M: MoveSource,
    A: AcceptanceRule,
{
    energy_model: E,
    moves: M,
    rule: A,
    density: Density,
    current_energy: f64,
    max_iterations: usize,
    proposed: usize,
    accepted: usize,
}

impl<E: EnergyModel> Sampler<E> {
    /// Builds a sampler with the production move source and acceptance rule.
    ///
    /// Validates the initial occupancy counts (at least two sites, at least
    /// one particle) and the configured temperature, derives disjoint RNG
    /// substreams for proposals and acceptance draws from the master seed,
    /// and evaluates the initial energy exactly once.
    pub fn new(energy_model: E, sites: Vec<u32>, config: &RunConfig) -> Result<Self, DiffusionError> {
        let density = Density::for_sampling(sites)?;
        let master = config.seed_policy.master_seed;
        let moves = RandomHops::new(RngHandle::from_seed(determinism::move_stream_seed(master)));
        let rule = Metropolis::new(
            config.temperature,
            RngHandle::from_seed(determinism::acceptance_stream_seed(master)),
        )?;
        Ok(Self::assemble(
            energy_model,
            density,
            config.max_iterations,
            moves,
            rule,
        ))
    }
}

impl<E, M, A> Sampler<E, M, A>
where
    E: EnergyModel,
    M: MoveSource,
    A: AcceptanceRule,
{
    /// Builds a sampler from explicit parts.
    ///
    /// Used by tests to wire scripted move sources and acceptance rules into
    /// the run loop; applies the same density validation as [`Sampler::new`].
    pub fn from_parts(
        energy_model: E,
        sites: Vec<u32>,
        max_iterations: usize,
        moves: M,
        rule: A,
    ) -> Result<Self, DiffusionError> {
        let density = Density::for_sampling(sites)?;
        Ok(Self::assemble(energy_model, density, max_iterations, moves, rule))
    }

    fn assemble(energy_model: E, density: Density, max_iterations: usize, moves: M, rule: A) -> Self {
        let current_energy = energy_model.evaluate(&density);
        Self {
            energy_model,
            moves,
            rule,
            density,
            current_energy,
            max_iterations,
            proposed: 0,
            accepted: 0,
        }
    }

    /// Produces the next candidate configuration without mutating the
    /// current one.
    pub fn propose_move(&mut self) -> HopProposal {
        self.moves.propose(&self.density)
    }

    /// Tests acceptance of an energy change under the configured rule.
    pub fn accept_change(&mut self, prior: f64, successor: f64) -> bool {
        self.rule.accept(prior, successor)
    }

    /// Executes one propose/evaluate/accept cycle; returns whether the
    /// proposal was taken.
    pub fn advance(&mut self) -> bool {
        let proposal = self.moves.propose(&self.density);
        let candidate_energy = self.energy_model.evaluate(&proposal.candidate);
        self.proposed += 1;
        let accepted = self.rule.accept(self.current_energy, candidate_energy);
        if accepted {
            self.accepted += 1;
            self.density = proposal.candidate;
            self.current_energy = candidate_energy;
        }
        accepted
    }

    /// Runs exactly `max_iterations` cycles and returns the final energy
    /// together with the final configuration.
    pub fn run(&mut self) -> (f64, Density) {
        for _ in 0..self.max_iterations {
            self.advance();
        }
        (self.current_energy, self.density.clone())
    }

    /// Current configuration.
    pub fn density(&self) -> &Density {
        &self.density
    }

    /// Cached energy of the current configuration.
    pub fn current_energy(&self) -> f64 {
        self.current_energy
    }

    /// Iteration budget applied per `run` call.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Total proposals issued so far.
    pub fn proposed(&self) -> usize {
        self.proposed
    }

    /// Total proposals accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Fraction of proposals accepted so far.
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposed == 0 {
            0.0
        } else {
            self.accepted as f64 / self.proposed as f64
        }
    }
}
