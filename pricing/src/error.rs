use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("invalid number of lattice steps: {0}, must be positive")]
    InvalidStepCount(usize),
    /// The risk-neutral up-probability left [0, 1]: volatility, rate and step size
    /// admit an arbitrage on the lattice.
    #[error("risk-neutral probability {probability} is outside [0, 1]")]
    ArbitrageInconsistency { probability: f64 },
}
