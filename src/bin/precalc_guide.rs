//! Interactive precalculus guide
//!
//! Usage:
//!   cargo run --bin precalc_guide -- [--config guide.json] [--no-clear] [--no-pause] [-v]

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use precalc_guide::{Guide, GuideConfig};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Precalculus guide
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Menu-driven precalculus guide with trigonometry calculators",
    long_about = None
)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not clear the terminal between screens
    #[arg(long, action = ArgAction::SetTrue)]
    no_clear: bool,

    /// Do not wait for Enter after each screen
    #[arg(long, action = ArgAction::SetTrue)]
    no_pause: bool,

    /// Decimal places for computed values
    #[arg(short, long)]
    precision: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(args: &Args) -> Result<GuideConfig> {
    let mut config = match &args.config {
        Some(path) => GuideConfig::load(path)?,
        None => GuideConfig::default(),
    };
    if args.no_clear {
        config.clear_screen = false;
    }
    if args.no_pause {
        config.pause_after_screen = false;
    }
    if let Some(places) = args.precision {
        config.decimal_places = places;
    }
    log::debug!("Effective configuration: {config:?}");
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(&args)?;
    let stdin = io::stdin();
    let mut guide = Guide::new(stdin.lock(), io::stdout(), config);
    guide.run()?;
    Ok(())
}
