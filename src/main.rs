use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use lifesearch::input::InputError;
use lifesearch::input::catalogs::{Catalog, CatalogKind};
use lifesearch::input::overrides::Overrides;
use lifesearch::input::planets::{PlanetTable, load_planets};
use lifesearch::model::weights::{ConfigError, EsiMode, WeightConfig};
use lifesearch::pipeline::stage2_classify::classify_planet;
use lifesearch::pipeline::stage7_report::{Stage7Input, write_reports};
use lifesearch::pipeline::{EngineConfig, HabitabilityEngine, PlanetReport};
use lifesearch::report::ReportError;
use lifesearch::tracing::{DEFAULT_LOG_LEVEL, init_tracing};

/// Exoplanet habitability scoring
#[derive(Debug, Parser)]
#[command(name = "lifesearch")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score planets from a parameter table and write reports
    Score(ScoreArgs),
    /// Print the default weight configuration as JSON
    Weights,
    /// Print the classification label for a mass, radius and temperature
    Classify {
        /// Planet mass in Earth masses
        #[arg(long)]
        mass: Option<f64>,
        /// Planet radius in Earth radii
        #[arg(long)]
        radius: Option<f64>,
        /// Equilibrium temperature in K
        #[arg(long)]
        temp: Option<f64>,
    },
}

#[derive(Debug, clap::Args)]
struct ScoreArgs {
    /// Planet table (.tsv, .csv or .txt, optionally .gz) with a pl_name column
    #[arg(long)]
    input: PathBuf,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// Weight configuration JSON
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Habitable Worlds Catalog table
    #[arg(long)]
    hwc: Option<PathBuf>,
    /// Habitable Zone Gallery table
    #[arg(long = "hz-gallery")]
    hz_gallery: Option<PathBuf>,
    /// Parameter overrides, one `Planet: key=value; key=value` per line
    #[arg(long)]
    overrides: Option<PathBuf>,
    /// Score only these planets (repeatable)
    #[arg(long = "planet")]
    planets: Vec<String>,
    /// ESI calculation mode: weights or similarity
    #[arg(long = "esi-mode")]
    esi_mode: Option<EsiMode>,
    /// Seed PHI weights from planet and star properties
    #[arg(long = "seed-phi")]
    seed_phi: bool,
    /// Log level or filter directive; RUST_LOG takes precedence
    #[arg(long = "log-level", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid log level: {0}")]
    LogLevel(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Score(args) => run_score(&args),
        Command::Weights => {
            println!("{}", serde_json::to_string_pretty(&WeightConfig::default())?);
            Ok(())
        }
        Command::Classify { mass, radius, temp } => {
            println!("{}", classify_planet(mass, radius, temp).label());
            Ok(())
        }
    }
}

fn run_score(args: &ScoreArgs) -> Result<(), CliError> {
    init_tracing(&args.log_level)?;

    let weights = load_weights(args.weights.as_deref(), args.esi_mode)?;
    let planets = load_inputs(args)?;
    if planets.is_empty() {
        tracing::warn!("no planets to score");
    }

    let engine = HabitabilityEngine::new(
        EngineConfig::new(weights.clone()).with_seeded_phi(args.seed_phi),
    );
    let reports: Vec<PlanetReport> = planets
        .iter()
        .map(|(name, record)| engine.process_planet(name, record))
        .collect();

    let input = Stage7Input {
        planets: &reports,
        weights: &weights,
    };
    write_reports(&input, &args.out)?;
    println!(
        "Scored {} planet(s); reports written to {}",
        reports.len(),
        args.out.display()
    );
    Ok(())
}

fn load_weights(
    path: Option<&Path>,
    esi_mode: Option<EsiMode>,
) -> Result<WeightConfig, CliError> {
    let weights = match path {
        Some(p) => WeightConfig::load(p)?,
        None => WeightConfig::default(),
    };
    Ok(match esi_mode {
        Some(mode) => weights.with_esi_mode(mode),
        None => weights,
    })
}

/// Planet table with overrides applied first, then catalog gap filling.
fn load_inputs(args: &ScoreArgs) -> Result<PlanetTable, CliError> {
    let mut planets = load_planets(&args.input)?;
    if !args.planets.is_empty() {
        planets.retain_names(&args.planets);
    }
    if let Some(path) = &args.overrides {
        let overrides = Overrides::load(path)?;
        overrides.apply(&mut planets);
    }
    if let Some(path) = &args.hwc {
        let matched = Catalog::load(CatalogKind::Hwc, path)?.merge_into(&mut planets);
        tracing::info!(matched, "merged HWC catalog");
    }
    if let Some(path) = &args.hz_gallery {
        let matched = Catalog::load(CatalogKind::HzGallery, path)?.merge_into(&mut planets);
        tracing::info!(matched, "merged HZ Gallery catalog");
    }
    Ok(planets)
}
