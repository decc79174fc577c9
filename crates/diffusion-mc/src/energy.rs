use diffusion_core::{Density, DiffusionError, ErrorInfo};

/// Scalar cost assigned to a density configuration.
///
/// The sampler treats the energy as an opaque callable; any model that maps
/// a density to a finite scalar can drive a run. Closures implement the
/// trait directly, which is how tests count evaluations.
pub trait EnergyModel {
    /// Evaluates the energy of the provided configuration.
    fn evaluate(&self, density: &Density) -> f64;
}

impl<F> EnergyModel for F
where
    F: Fn(&Density) -> f64,
{
    fn evaluate(&self, density: &Density) -> f64 {
        self(density)
    }
}

/// Pairwise interaction energy of the diffusion model.
///
/// Each pair of particles co-located at a site contributes to the cost, so
/// spread-out configurations score lower:
/// `coefficient * 0.5 * sum(n_i * (n_i - 1))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEnergy {
    coefficient: f64,
}

impl InteractionEnergy {
    /// Creates a model with the given scaling coefficient.
    pub fn new(coefficient: f64) -> Result<Self, DiffusionError> {
        if coefficient < 0.0 {
            return Err(DiffusionError::Parameter(
                ErrorInfo::new("negative-coefficient", "energy coefficient must be non-negative")
                    .with_context("coefficient", coefficient.to_string()),
            ));
        }
        Ok(Self { coefficient })
    }

    /// Returns the scaling coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl Default for InteractionEnergy {
    fn default() -> Self {
        Self { coefficient: 1.0 }
    }
}

impl EnergyModel for InteractionEnergy {
    fn evaluate(&self, density: &Density) -> f64 {
        interaction_energy(density, self.coefficient)
    }
}

/// Computes the interaction energy of a density with an explicit coefficient.
///
/// Zero for the empty chain, for any configuration whose sites all hold zero
/// or one particle, and for a zero coefficient. Linear in the coefficient.
pub fn interaction_energy(density: &Density, coefficient: f64) -> f64 {
    let pair_sum: f64 = density
        .sites()
        .iter()
        .map(|&n| {
            let n = f64::from(n);
            n * (n - 1.0)
        })
        .sum();
    coefficient * 0.5 * pair_sum
}
