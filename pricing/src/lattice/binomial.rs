use tracing::{debug, enabled, trace, Level};

use crate::common::models::OptionParameters;
use crate::error::PricingError;
use crate::lattice::factors::LatticeFactors;

/// Step count used when none is given.
pub const DEFAULT_STEPS: usize = 1000;

pub trait OptionPrice {
    type Params;
    fn call(&self, params: &Self::Params) -> Result<f64, PricingError>;
}

/// Payoff of a call at expiry.
pub fn payoff(price: f64, strike: f64) -> f64 {
    if price > strike {
        price - strike
    } else {
        0.0
    }
}

/// European call on a Cox-Ross-Rubinstein lattice.
/// https://en.wikipedia.org/wiki/Binomial_options_pricing_model
///
/// Both passes work on a single row of `steps + 1` nodes instead of the full
/// triangular tree, so memory is linear and time quadratic in `steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
}

impl Default for BinomialTree {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

impl BinomialTree {
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Asset prices at expiry, index `j` being reached by `j` up moves.
    fn terminal_prices(&self, asset: f64, factors: &LatticeFactors) -> Vec<f64> {
        let mut prices = vec![0.0; self.steps + 1];
        prices[0] = asset;
        for idx in 1..=self.steps {
            // top down, so prices[j - 1] still holds the previous level
            for j in (1..=idx).rev() {
                prices[j] = factors.up() * prices[j - 1];
            }
            prices[0] *= factors.down();
        }
        prices
    }

    /// Discounts the expiry values back to the root, shrinking the live row by one node per level.
    fn backward_induction(&self, values: &mut [f64], factors: &LatticeFactors) -> f64 {
        let p = factors.probability();
        let discount = factors.discount();
        for level in (1..=self.steps).rev() {
            for j in 0..level {
                values[j] = discount * (p * values[j + 1] + (1.0 - p) * values[j]);
            }
        }
        values[0]
    }
}

impl OptionPrice for BinomialTree {
    type Params = OptionParameters;

    fn call(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        let factors = LatticeFactors::new(params, self.steps)?;

        let prices = self.terminal_prices(params.asset(), &factors);
        if enabled!(Level::TRACE) {
            trace!(?prices, "terminal asset prices");
        }

        let mut values: Vec<f64> = prices
            .iter()
            .map(|&price| payoff(price, params.strike()))
            .collect();
        if enabled!(Level::TRACE) {
            trace!(strike = params.strike(), ?values, "terminal payoffs");
        }

        let value = self.backward_induction(&mut values, &factors);
        debug!(steps = self.steps, value, "priced european call");
        Ok(value)
    }
}

/// The present value of a European call priced on a lattice of `steps` steps.
pub fn price(opt: &OptionParameters, steps: usize) -> Result<f64, PricingError> {
    BinomialTree::new(steps)?.call(opt)
}
