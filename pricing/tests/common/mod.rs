//! Closed form Black-Scholes-Merton prices, the limit the lattice converges to.
//! https://en.wikipedia.org/wiki/Black-Scholes_model

use probability::distribution::{Distribution, Gaussian};

fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

fn d1_d2(asset: f64, strike: f64, expiry: f64, rate: f64, vola: f64) -> (f64, f64) {
    let sigma_exp = vola * expiry.sqrt();
    let d1 = ((asset / strike).ln() + (rate + vola.powi(2) / 2.0) * expiry) / sigma_exp;
    (d1, d1 - sigma_exp)
}

pub fn black_scholes_call(asset: f64, strike: f64, expiry: f64, rate: f64, vola: f64) -> f64 {
    let (d1, d2) = d1_d2(asset, strike, expiry, rate, vola);
    cdf(d1) * asset - cdf(d2) * strike * (-rate * expiry).exp()
}

pub fn black_scholes_put(asset: f64, strike: f64, expiry: f64, rate: f64, vola: f64) -> f64 {
    let (d1, d2) = d1_d2(asset, strike, expiry, rate, vola);
    cdf(-d2) * strike * (-rate * expiry).exp() - cdf(-d1) * asset
}
