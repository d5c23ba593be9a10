mod binomial;
mod factors;

pub use binomial::{payoff, price, BinomialTree, OptionPrice, DEFAULT_STEPS};
pub use factors::{LatticeFactors, PROBABILITY_TOLERANCE};
