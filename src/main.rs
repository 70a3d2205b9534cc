use circlesim::{bench_pairs, bench_session, build_session, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file: a name under scenarios/ or a path
    #[arg(short, default_value = "avoidance.yaml")]
    file_name: String,

    /// Override the number of steps to run
    #[arg(long)]
    steps: Option<u64>,

    /// Override the spawn seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_pairs()?;
        bench_session()?;
        return Ok(());
    }

    let mut scenario_cfg = load_scenario(&args.file_name)?;
    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = steps;
    }
    if let Some(seed) = args.seed {
        scenario_cfg.parameters.seed = seed;
    }

    let mut session = build_session(&scenario_cfg).context("invalid scenario")?;
    let summary = session.run();

    for (rank, (id, fitness)) in session.scores().standings().iter().take(5).enumerate() {
        info!("#{} bot {} fitness {:.2}", rank + 1, id, fitness);
    }
    info!("{} of {} steps run", summary.steps, scenario_cfg.parameters.steps);

    Ok(())
}
