use tracing::debug;

use crate::common::models::OptionParameters;
use crate::error::PricingError;

/// Round-off allowed on the risk-neutral probability before it counts as outside [0, 1].
/// With zero volatility `p` is 1 analytically but `sqrt(ufactor^2 - 1)` cancels badly.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Per-step constants of a recombining lattice with `u * v = 1`, where the up and
/// down moves match the drift and variance of the asset over one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeFactors {
    step: f64,
    discount: f64,
    up: f64,
    down: f64,
    probability: f64,
}

impl LatticeFactors {
    pub fn new(params: &OptionParameters, steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidStepCount(steps));
        }

        let step = params.expiry() / steps as f64;
        let discount = (-params.rate() * step).exp();
        let ufactor =
            0.5 * (discount + ((params.rate() + params.volatility().powi(2)) * step).exp());
        let up = ufactor + (ufactor * ufactor - 1.0).sqrt();
        let down = 1.0 / up;
        let probability = ((params.rate() * step).exp() - down) / (up - down);

        let admissible = -PROBABILITY_TOLERANCE..=1.0 + PROBABILITY_TOLERANCE;
        if !admissible.contains(&probability) {
            return Err(PricingError::ArbitrageInconsistency { probability });
        }

        debug!(step, discount, up, down, probability, "lattice factors");
        Ok(Self {
            step,
            discount,
            up,
            down,
            probability,
        })
    }

    /// Length of one step in years.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// One-step discount factor.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn up(&self) -> f64 {
        self.up
    }

    pub fn down(&self) -> f64 {
        self.down
    }

    /// Risk-neutral probability of an up move.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}
