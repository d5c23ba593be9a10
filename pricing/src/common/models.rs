use crate::error::PricingError;

/// Market data of a European call, immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// the asset's price at time t
    asset: f64,
    /// the strike or exercise price of the option
    strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    expiry: f64,
    /// the annualized risk-free interest rate, as a decimal
    rate: f64,
    /// the annualized standard deviation of the asset's returns
    volatility: f64,
}

impl OptionParameters {
    pub fn new(
        asset: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        ensure_positive("asset", asset)?;
        ensure_positive("strike", strike)?;
        ensure_positive("expiry", expiry)?;
        ensure_finite("rate", rate)?;
        ensure_finite("volatility", volatility)?;
        if volatility < 0.0 {
            return Err(PricingError::InvalidParameter {
                name: "volatility",
                value: volatility,
            });
        }

        Ok(Self {
            asset,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Parameters as quoted at the prompt: expiry in months and the rate in percent.
    pub fn from_quote(
        asset: f64,
        strike: f64,
        expiry_months: f64,
        rate_percent: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        Self::new(
            asset,
            strike,
            expiry_months / 12.0,
            rate_percent / 100.0,
            volatility,
        )
    }

    pub fn asset(&self) -> f64 {
        self.asset
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter { name, value })
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidParameter { name, value })
    }
}
