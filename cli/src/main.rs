//! Binomial CLI - prices a European call on a Cox-Ross-Rubinstein lattice.
//!
//! Without market flags the quote is read interactively, one prompt per value:
//!
//! ```text
//! $ binomial
//! Enter the asset price: 100
//! ...
//! The value of your option is: 10.45
//! ```
//!
//! The same quote can be passed as flags, e.g.
//! `binomial --asset 100 --strike 100 --expiry-months 12 --rate-percent 5 --volatility 0.2`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Args, Parser};
use pricing::lattice::{BinomialTree, OptionPrice};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod prompt;

use config::PricerConfig;
use error::{CliError, Result};
use prompt::{Prompter, Quote};

/// Price a European call option on a binomial lattice
#[derive(Parser)]
#[command(name = "binomial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "binomial.toml")]
    config: PathBuf,

    /// Number of lattice steps, overrides the configuration file
    #[arg(short, long)]
    steps: Option<usize>,

    #[command(flatten)]
    quote: QuoteArgs,
}

/// Quote given on the command line instead of at the prompt
#[derive(Args, Debug, Default)]
struct QuoteArgs {
    /// Current price of the underlying
    #[arg(long, allow_negative_numbers = true)]
    asset: Option<f64>,

    /// Exercise price
    #[arg(long, allow_negative_numbers = true)]
    strike: Option<f64>,

    /// Time to expiry in months
    #[arg(long, allow_negative_numbers = true)]
    expiry_months: Option<f64>,

    /// Risk-free interest rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate_percent: Option<f64>,

    /// Annualized volatility as a decimal
    #[arg(long, allow_negative_numbers = true)]
    volatility: Option<f64>,
}

impl QuoteArgs {
    /// `None` when no flag was given; every flag is needed once one is.
    fn quote(&self) -> Result<Option<Quote>> {
        match (
            self.asset,
            self.strike,
            self.expiry_months,
            self.rate_percent,
            self.volatility,
        ) {
            (None, None, None, None, None) => Ok(None),
            (
                Some(asset),
                Some(strike),
                Some(expiry_months),
                Some(rate_percent),
                Some(volatility),
            ) => Ok(Some(Quote {
                asset,
                strike,
                expiry_months,
                rate_percent,
                volatility,
            })),
            _ => Err(CliError::Input(
                "--asset, --strike, --expiry-months, --rate-percent and --volatility \
                 must be given together"
                    .to_string(),
            )),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = PricerConfig::load(&cli.config)?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let steps = cli.steps.unwrap_or(config.steps);
    info!(config = %cli.config.display(), steps, "starting pricer");

    let stdin = io::stdin();
    run(cli.quote.quote()?, steps, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Prices `quote`, or the quote read from `input` when none is given, and
/// writes the result line to `output`.
fn run<R: BufRead, W: Write>(
    quote: Option<Quote>,
    steps: usize,
    input: R,
    mut output: W,
) -> Result<()> {
    let tree = BinomialTree::new(steps)?;

    let quote = match quote {
        Some(quote) => quote,
        None => {
            let mut prompter = Prompter::new(input, &mut output);
            prompter.read_quote()?
        }
    };
    debug!(?quote, "quote");

    let value = tree.call(&quote.parameters()?)?;
    writeln!(output, "The value of your option is: {:.2}", value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PROMPTS;
    use pricing::PricingError;

    fn run_session(quote: Option<Quote>, steps: usize, input: &str) -> Result<String> {
        let mut output = Vec::new();
        run(quote, steps, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn interactive_session() {
        let transcript = run_session(None, 1000, "100\n100\n12\n5\n0.2\n").unwrap();
        let expected_head = format!("{}\n\n", PROMPTS.concat());
        assert!(transcript.starts_with(&expected_head));
        assert!(transcript.ends_with("The value of your option is: 10.45\n"));
    }

    #[test]
    fn quote_from_flags_skips_prompts() {
        let quote = Quote {
            asset: 100.0,
            strike: 100.0,
            expiry_months: 12.0,
            rate_percent: 5.0,
            volatility: 0.2,
        };
        let transcript = run_session(Some(quote), 1000, "").unwrap();
        assert_eq!(transcript, "The value of your option is: 10.45\n");
    }

    #[test]
    fn zero_steps_fail_before_prompting() {
        let mut output = Vec::new();
        let err = run(None, 0, "100 100 12 5 0.2".as_bytes(), &mut output).unwrap_err();
        assert!(matches!(
            err,
            CliError::Pricing(PricingError::InvalidStepCount(0))
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let err = run_session(None, 100, "100 100 0 5 0.2").unwrap_err();
        assert!(matches!(
            err,
            CliError::Pricing(PricingError::InvalidParameter { name: "expiry", .. })
        ));
    }

    #[test]
    fn partial_flags() {
        let args = QuoteArgs {
            asset: Some(100.0),
            ..QuoteArgs::default()
        };
        assert!(matches!(args.quote(), Err(CliError::Input(_))));
        assert_eq!(QuoteArgs::default().quote().unwrap(), None);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "binomial",
            "--asset",
            "50",
            "--strike",
            "100",
            "--expiry-months",
            "6",
            "--rate-percent",
            "-0.5",
            "--volatility",
            "0.3",
            "--steps",
            "200",
        ])
        .unwrap();
        assert_eq!(cli.steps, Some(200));
        let quote = cli.quote.quote().unwrap().unwrap();
        assert_eq!(quote.rate_percent, -0.5);
        assert_eq!(quote.expiry_months, 6.0);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_negative_steps() {
        assert!(Cli::try_parse_from(["binomial", "--steps", "-5"]).is_err());
    }
}
