//! European call pricing on a recombining Cox-Ross-Rubinstein binomial lattice.
//!
//! ```
//! use pricing::common::models::OptionParameters;
//! use pricing::lattice::price;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let value = price(&params, 1000).unwrap();
//! assert!((value - 10.45).abs() < 0.05);
//! ```

pub mod common;
pub mod error;
pub mod lattice;

pub use error::PricingError;
