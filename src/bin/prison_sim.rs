//! Prison Sim CLI binary.
//!
//! # Commands
//!
//! - `run` - Run the simulation and export results (default when no command is given)
//! - `personas` - Print a generated population without contacting the oracle

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use prison_sim::{Config, DryRunOracle, HttpOracle, Oracle, Simulation, VERSION};
use rand::{RngCore, SeedableRng};

#[derive(Parser)]
#[command(name = "prison-sim")]
#[command(version = VERSION)]
#[command(about = "Multi-agent prison role-play simulation with LLM dialogue and scoring", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/prison-sim/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run events and export the results
    Run(RunArgs),

    /// Print agent personas and biographies
    Personas {
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Number of events
    #[arg(short, long)]
    events: Option<usize>,

    /// Dialogue turns per event
    #[arg(short, long)]
    turns: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Text export path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long)]
    model: Option<String>,

    /// Chat completions URL
    #[arg(long)]
    api_url: Option<String>,

    /// Skip actual LLM calls
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_json);

    let config = Config::load(cli.config)?.with_env();

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => cmd_run(config, args),
        Commands::Personas { seed } => cmd_personas(config, seed),
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn cmd_run(mut config: Config, args: RunArgs) -> anyhow::Result<()> {
    if let Some(events) = args.events {
        config.simulation.events = events;
    }
    if let Some(turns) = args.turns {
        config.simulation.turns = turns;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(output) = args.output {
        config.simulation.output = output;
    }
    if let Some(model) = args.model {
        config.oracle.model = model;
    }
    if let Some(url) = args.api_url {
        config.oracle.api_url = url;
    }

    let mut rng = make_rng(config.simulation.seed);
    let oracle: Arc<dyn Oracle> = if args.dry_run {
        Arc::new(DryRunOracle::new())
    } else {
        Arc::new(HttpOracle::new(config.oracle.clone())?)
    };

    let mut sim = Simulation::from_config(&config.simulation, oracle, &mut rng)?;

    tracing::info!(
        agents = sim.agents().len(),
        events = config.simulation.events,
        turns = config.simulation.turns,
        model = %config.oracle.model,
        dry_run = args.dry_run,
        "simulation starting"
    );

    let start_time = Instant::now();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(sim.run_simulation(config.simulation.events, &mut rng))?;

    sim.export_results(&config.simulation.output)?;
    if let Some(json_path) = &args.json {
        sim.export_json(json_path)?;
    }

    println!("{}", sim.summary());
    println!("Elapsed time: {:.2}s", start_time.elapsed().as_secs_f64());
    println!("Results written to: {}", config.simulation.output.display());

    Ok(())
}

fn cmd_personas(config: Config, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed.or(config.simulation.seed));
    let sim = Simulation::from_config(&config.simulation, Arc::new(DryRunOracle::new()), &mut rng)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sim.write_personas(&mut out)?;
    out.flush()?;

    Ok(())
}
