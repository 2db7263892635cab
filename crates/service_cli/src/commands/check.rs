//! Check command: prints the resolved configuration and host resources.

use pricer_models::analytical::black_scholes_price;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Validates `config` and prints what a `price` run would use.
pub fn run(config: &AppConfig) -> Result<()> {
    config.validate()?;
    let params = config.market.to_params()?;
    let sim = &config.simulation;

    info!("configuration valid");

    println!("mcpricer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Market:");
    println!("  spot       {}", params.spot);
    println!("  strike     {}", params.strike);
    println!("  maturity   {}", params.maturity);
    println!("  rate       {}", params.rate);
    println!("  volatility {}", params.volatility);
    println!("  dividend   {}", params.dividend);
    println!("  call (closed form) {:.4}", black_scholes_price(&params).unwrap_or(f64::NAN));
    println!();
    println!("Simulation:");
    println!("  scheme  {}", sim.scheme);
    println!("  paths   {}", sim.paths);
    println!("  steps   {}", sim.steps);
    println!("  workers {} ({:?})", sim.resolved_workers(), sim.mode());
    match sim.seed {
        Some(seed) => println!("  seed    {}", seed),
        None => println!("  seed    (entropy)"),
    }
    println!();
    println!("System:");
    println!("  logical CPUs   {}", num_cpus::get());
    println!("  physical CPUs  {}", num_cpus::get_physical());
    println!("  log level      {}", config.log_level);

    Ok(())
}
