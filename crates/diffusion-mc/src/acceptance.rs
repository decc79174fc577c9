use diffusion_core::{DiffusionError, ErrorInfo, RngHandle};

/// Computes the Metropolis acceptance probability for an energy change.
///
/// Unity whenever the successor energy does not exceed the prior; otherwise
/// the thermal factor `exp(-(successor - prior) / temperature)`.
pub fn acceptance_probability(prior: f64, successor: f64, temperature: f64) -> f64 {
    if successor <= prior {
        1.0
    } else {
        (-(successor - prior) / temperature).exp()
    }
}

/// Decides whether a proposed energy change is taken.
///
/// Trait seam mirroring [`crate::moves::MoveSource`]: tests script the
/// outcomes, production uses [`Metropolis`].
pub trait AcceptanceRule {
    /// Returns true when the change from `prior` to `successor` is accepted.
    fn accept(&mut self, prior: f64, successor: f64) -> bool;
}

/// Standard Metropolis criterion at a fixed strictly positive temperature.
#[derive(Debug, Clone)]
pub struct Metropolis {
    temperature: f64,
    rng: RngHandle,
}

impl Metropolis {
    /// Creates the rule, validating the temperature.
    ///
    /// Exactly zero is reported as unsupported rather than a plain domain
    /// error: zero-temperature dynamics are greedy descent, a different
    /// algorithm, and are not silently approximated here.
    pub fn new(temperature: f64, rng: RngHandle) -> Result<Self, DiffusionError> {
        if temperature == 0.0 {
            return Err(DiffusionError::Unsupported(
                ErrorInfo::new("zero-temperature", "zero temperature dynamics not implemented")
                    .with_hint("greedy descent is a different algorithm; use a positive temperature"),
            ));
        }
        if temperature < 0.0 {
            return Err(DiffusionError::Parameter(
                ErrorInfo::new("negative-temperature", "temperature must be strictly positive")
                    .with_context("temperature", temperature.to_string()),
            ));
        }
        Ok(Self { temperature, rng })
    }

    /// Returns the fixed temperature of the rule.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl AcceptanceRule for Metropolis {
    fn accept(&mut self, prior: f64, successor: f64) -> bool {
        if successor <= prior {
            return true;
        }
        let threshold = acceptance_probability(prior, successor, self.temperature);
        self.rng.next_f64() < threshold
    }
}
