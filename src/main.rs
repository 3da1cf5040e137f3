use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rps_arena::simulation::arena::Arena;
use rps_arena::simulation::batch;
use rps_arena::simulation::kind::Kind;
use rps_arena::simulation::params::{Params, parse_entity_count};
use tracing::info;

/// Headless Rock, Paper, Scissors ecosystem.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of entities of each kind.
    #[arg(short = 'n', long, value_name = "N")]
    count: Option<String>,
    /// Arena width.
    #[arg(long)]
    width: Option<f32>,
    /// Arena height.
    #[arg(long)]
    height: Option<f32>,
    /// Random seed.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Fixed tick step.
    #[arg(long)]
    dt: Option<f32>,
    /// Stop after this many ticks without a winner.
    #[arg(long, value_name = "TICKS")]
    max_ticks: Option<u64>,
    /// Read parameters from a JSON file before applying the flags above.
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,
    /// Write the effective parameters to a JSON file.
    #[arg(long, value_name = "FILE")]
    save_config: Option<String>,
    /// Write the final arena state to a JSON file.
    #[arg(long, value_name = "FILE")]
    snapshot: Option<String>,
    /// Continue a run from a saved arena state.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "config", "count", "width", "height", "seed", "dt", "max_ticks", "save_config", "runs",
        ]
    )]
    resume: Option<String>,
    /// Play this many seeded runs in parallel and report win counts.
    #[arg(short, long, default_value_t = 1)]
    runs: usize,
    /// Print the most recent events when the run ends.
    #[arg(long)]
    events: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(path) = &cli.resume {
        let mut arena = Arena::load_from_file(path)
            .with_context(|| format!("failed to load snapshot {path}"))?;
        info!(path = path.as_str(), ticks = arena.ticks(), "resuming arena");
        return play(&mut arena, &cli);
    }

    let params = build_params(&cli)?;

    if let Some(path) = &cli.save_config {
        params
            .save_to_file(path)
            .with_context(|| format!("failed to write config {path}"))?;
    }

    if cli.runs > 1 {
        return report_batch(&params, cli.runs);
    }

    let mut arena = Arena::new(params)?;
    play(&mut arena, &cli)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn build_params(cli: &Cli) -> Result<Params> {
    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)
            .with_context(|| format!("failed to load config {path}"))?,
        None => Params::default(),
    };

    if let Some(count) = &cli.count {
        params.num_per_kind = parse_entity_count(count)?;
    }
    if let Some(width) = cli.width {
        params.arena_width = width;
    }
    if let Some(height) = cli.height {
        params.arena_height = height;
    }
    if let Some(seed) = cli.seed {
        params.seed = seed;
    }
    if let Some(dt) = cli.dt {
        params.dt = dt;
    }
    if cli.max_ticks.is_some() {
        params.max_ticks = cli.max_ticks;
    }

    params.validate()?;
    Ok(params)
}

fn play(arena: &mut Arena, cli: &Cli) -> Result<()> {
    let started = Local::now();
    let outcome = arena.run();
    let finished = Local::now();

    match outcome {
        Some(outcome) => {
            println!("Game Over!");
            println!("Winning team: {}", outcome.winner.team_name());
            println!(
                "Game duration: {} ticks ({:.2} simulated time)",
                outcome.ticks, outcome.time
            );
        }
        None => {
            let [rocks, papers, scissors] = arena.population().counts();
            println!("No winner after {} ticks", arena.ticks());
            println!("Remaining: {rocks} rocks, {papers} papers, {scissors} scissors");
        }
    }

    let wall = finished - started;
    println!(
        "Started {}, finished {} ({} ms wall clock)",
        started.format("%Y-%m-%d %H:%M:%S"),
        finished.format("%H:%M:%S"),
        wall.num_milliseconds()
    );

    if cli.events {
        for logged in arena.log().events().iter().rev() {
            println!("[{:>10.2}] {}", logged.time, logged.event);
        }
    }

    if let Some(path) = &cli.snapshot {
        arena
            .save_to_file(path)
            .with_context(|| format!("failed to write snapshot {path}"))?;
    }

    Ok(())
}

fn report_batch(params: &Params, runs: usize) -> Result<()> {
    let report = batch::run_batch(params, runs)?;

    println!("Runs: {runs}");
    for kind in Kind::ALL {
        println!("  {:<9} {}", kind.team_name(), report.wins_for(kind));
    }
    println!("  undecided {}", report.undecided);
    if let Some(mean) = report.mean_ticks_to_win() {
        println!("Mean ticks to win: {mean:.1}");
    }
    Ok(())
}
