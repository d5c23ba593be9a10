//! Reads the option quote from an interactive session.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use pricing::common::models::OptionParameters;

use crate::error::{CliError, Result};

pub const PROMPTS: [&str; 5] = [
    "Enter the asset price: ",
    "Enter the strike price: ",
    "Enter the expiry in months: ",
    "Enter the interest rate as a percent: ",
    "Enter the volatility: ",
];

/// An option as entered by the user: expiry in months, rate in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub asset: f64,
    pub strike: f64,
    pub expiry_months: f64,
    pub rate_percent: f64,
    pub volatility: f64,
}

impl Quote {
    pub fn parameters(&self) -> Result<OptionParameters> {
        let params = OptionParameters::from_quote(
            self.asset,
            self.strike,
            self.expiry_months,
            self.rate_percent,
            self.volatility,
        )?;
        Ok(params)
    }
}

/// Writes prompts and reads whitespace separated numbers, one per prompt.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn ask(&mut self, prompt: &str) -> Result<f64> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let token = self.next_token()?.ok_or_else(|| {
            CliError::Input(format!("no value given for '{}'", prompt.trim_end()))
        })?;
        token.parse::<f64>().map_err(|_| {
            CliError::Input(format!(
                "'{}' is not a number (asked '{}')",
                token,
                prompt.trim_end()
            ))
        })
    }

    /// Asks every prompt in turn.
    pub fn read_quote(&mut self) -> Result<Quote> {
        let mut values = [0.0; 5];
        for (value, prompt) in values.iter_mut().zip(PROMPTS) {
            *value = self.ask(prompt)?;
        }
        write!(self.output, "\n\n")?;

        let [asset, strike, expiry_months, rate_percent, volatility] = values;
        Ok(Quote {
            asset,
            strike,
            expiry_months,
            rate_percent,
            volatility,
        })
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
