//! Price command: European and Asian puts and calls on one market.

use std::sync::Arc;
use std::time::Duration;

use pricer_models::analytical::black_scholes_price;
use pricer_models::models::{GbmSde, ModelParameters, OptionType};
use pricer_models::payoff;
use pricer_pricing::mc::{
    AsianPricer, EuropeanPricer, MonteCarloConfig, PathPricer, PricingResult, SimulationHub,
};
use pricer_pricing::rng::PricerRng;
use pricer_pricing::scheme::DiscretisationScheme;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::stopwatch::Stopwatch;
use crate::Result;

/// One row of the output table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub label: &'static str,
    pub result: PricingResult,
    pub reference: Option<f64>,
    pub elapsed: Duration,
}

/// Runs the four pricings and prints the table.
pub fn run(config: &AppConfig) -> Result<()> {
    let rows = price_all(config)?;
    print_table(config, &rows);
    Ok(())
}

/// Prices European put and call, then Asian put and call.
pub fn price_all(config: &AppConfig) -> Result<Vec<PriceRow>> {
    let params = config.market.to_params()?;
    let sim = &config.simulation;

    let seed = match sim.seed {
        Some(seed) => seed,
        None => {
            let seed = PricerRng::from_entropy().seed();
            info!(seed, "no seed configured, drew one from entropy");
            seed
        }
    };
    let mc_config = sim.to_mc_config(seed)?;

    let model = Arc::new(GbmSde::new(params)?);
    let scheme = sim.scheme.build(model, sim.steps)?;

    info!(
        scheme = %sim.scheme,
        paths = sim.paths,
        steps = sim.steps,
        workers = mc_config.mode().workers(),
        seed,
        "pricing"
    );

    let discount = payoff::flat_discount(params.rate, params.maturity);
    let mut rows = Vec::with_capacity(4);

    for option_type in [OptionType::Put, OptionType::Call] {
        let mut pricer = EuropeanPricer::new(payoff::vanilla(option_type, params.strike), discount);
        let (result, elapsed) = price_one(&scheme, &mut pricer, mc_config)?;
        let reference = reference_price(&params, option_type);
        rows.push(PriceRow {
            label: match option_type {
                OptionType::Put => "European put",
                OptionType::Call => "European call",
            },
            result,
            reference,
            elapsed,
        });
    }

    for option_type in [OptionType::Put, OptionType::Call] {
        let mut pricer = AsianPricer::new(payoff::vanilla(option_type, params.strike), discount);
        let (result, elapsed) = price_one(&scheme, &mut pricer, mc_config)?;
        rows.push(PriceRow {
            label: match option_type {
                OptionType::Put => "Asian put",
                OptionType::Call => "Asian call",
            },
            result,
            reference: None,
            elapsed,
        });
    }

    for row in &rows {
        info!(
            option = row.label,
            price = row.result.price,
            std_error = row.result.std_error().unwrap_or(f64::NAN),
            elapsed_ms = row.elapsed.as_millis() as u64,
            "priced"
        );
    }
    Ok(rows)
}

fn price_one<S, P>(
    scheme: &S,
    pricer: &mut P,
    config: MonteCarloConfig,
) -> Result<(PricingResult, Duration)>
where
    S: DiscretisationScheme,
    P: PathPricer,
{
    let mut hub = SimulationHub::builder()
        .scheme(scheme)
        .pricer(pricer)
        .config(config)
        .build()?;
    let (result, elapsed) = Stopwatch::time(|| hub.run_seeded());
    Ok((result?, elapsed))
}

fn reference_price(params: &ModelParameters, option_type: OptionType) -> Option<f64> {
    let params = ModelParameters {
        option_type,
        ..*params
    };
    match black_scholes_price(&params) {
        Ok(price) => Some(price),
        Err(e) => {
            warn!(error = %e, "no closed-form reference");
            None
        }
    }
}

fn print_table(config: &AppConfig, rows: &[PriceRow]) {
    let market = &config.market;
    println!(
        "S={} K={} T={} r={} sigma={} q={}",
        market.spot, market.strike, market.maturity, market.rate, market.volatility, market.dividend
    );
    println!(
        "scheme={} paths={} steps={}",
        config.simulation.scheme, config.simulation.paths, config.simulation.steps
    );
    println!();
    println!(
        "{:<14} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "option", "price", "std err", "95% ci", "closed", "ms"
    );
    for row in rows {
        println!(
            "{:<14} {:>10.4} {:>10} {:>10} {:>10} {:>10}",
            row.label,
            row.result.price,
            fmt_opt(row.result.std_error()),
            fmt_opt(row.result.confidence_95()),
            fmt_opt(row.reference),
            row.elapsed.as_millis()
        );
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.4}", v))
}
