use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bivalve::report::{render_table, DEFAULT_EVERY_DAYS};
use bivalve::{
    run_config, GrowthCeilingPolicy, NegativeMassPolicy, SimulationConfig, SpawningPolicy,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the default configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated time in days
    #[arg(long)]
    horizon_days: Option<f64>,

    /// Euler timestep in days
    #[arg(long)]
    dt: Option<f64>,

    /// Growth ceiling policy (constant, size-dependent)
    #[arg(long)]
    growth_ceiling: Option<GrowthCeilingPolicy>,

    /// Spawning policy (none, threshold-based)
    #[arg(long)]
    spawning: Option<SpawningPolicy>,

    /// Behaviour when somatic mass goes negative (reject, propagate)
    #[arg(long)]
    negative_mass: Option<NegativeMassPolicy>,

    /// Constant water temperature [°C]
    #[arg(long)]
    temperature: Option<f64>,

    /// Constant food proxy
    #[arg(long)]
    food: Option<f64>,

    /// Days between printed rows
    #[arg(long, default_value_t = DEFAULT_EVERY_DAYS, value_parser = positive_days)]
    every_days: f64,
}

fn positive_days(s: &str) -> std::result::Result<f64, String> {
    let days: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if days.is_finite() && days > 0.0 {
        Ok(days)
    } else {
        Err(format!("must be a positive number of days, got {s}"))
    }
}

impl Args {
    fn load_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                SimulationConfig::from_toml(&content)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => SimulationConfig::load_defaults(),
        };

        if let Some(horizon_days) = self.horizon_days {
            config.horizon_days = horizon_days;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(policy) = self.growth_ceiling {
            config.policies.growth_ceiling = policy;
        }
        if let Some(policy) = self.spawning {
            config.policies.spawning = policy;
        }
        if let Some(policy) = self.negative_mass {
            config.policies.negative_mass = policy;
        }
        if let Some(temperature) = self.temperature {
            config.forcing.temperature = temperature;
        }
        if let Some(food) = self.food {
            config.forcing.food = food;
        }

        config.validate().context("invalid run configuration")?;
        config.params.validate().context("invalid parameter set")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "bivalve=info,bivalve_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.load_config()?;
    info!(
        horizon_days = config.horizon_days,
        dt = config.dt,
        policies = ?config.policies,
        "configuration ready"
    );

    let output = run_config(&config).context("model run failed")?;

    print!("{}", render_table(&output, args.every_days)?);
    Ok(())
}
