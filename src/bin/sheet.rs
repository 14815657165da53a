use std::env;
use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use tipsheet::cache::TipCache;
use tipsheet::engine::{Config, Engine};
use tipsheet::fixture::{read_fixtures, Fixture};
use tipsheet::print;
use tipsheet::selection::TipPair;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the fixture list from (JSON array)
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// emit the sheet as JSON instead of a table
    #[clap(long)]
    json: bool,

    /// override the 1X2 sharpening exponent
    #[clap(long)]
    tau: Option<f64>,

    /// override the big-favourite tilt threshold (rating points)
    #[clap(long)]
    tilt: Option<f64>,

    /// override the low-confidence edge threshold
    #[clap(long)]
    min_edge: Option<f64>,
}
impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            sharpen_tau: self.tau.unwrap_or(defaults.sharpen_tau),
            strong_diff_tilt: self.tilt.unwrap_or(defaults.strong_diff_tilt),
            edge_min: self.min_edge.unwrap_or(defaults.edge_min),
        }
    }
}

#[derive(serde::Serialize)]
struct SheetRow<'a> {
    #[serde(flatten)]
    fixture: &'a Fixture,
    #[serde(flatten)]
    tips: &'a TipPair,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let engine = Engine::try_from(args.config())?;
    let fixtures = read_fixtures(&args.file)?;
    info!("loaded {} fixtures", fixtures.len());

    let mut cache = TipCache::new();
    let rows = fixtures
        .iter()
        .map(|fixture| (fixture, cache.tips_for(fixture, &engine).clone()))
        .collect::<Vec<_>>();

    if args.json {
        let sheet = rows
            .iter()
            .map(|(fixture, tips)| SheetRow { fixture: *fixture, tips })
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&sheet)?);
    } else {
        let borrowed = rows
            .iter()
            .map(|(fixture, tips)| (*fixture, tips))
            .collect::<Vec<_>>();
        let table = print::tabulate_sheet(&borrowed);
        println!("Tip sheet generated {}", Local::now().format("%Y-%m-%d %H:%M"));
        println!("{}", Console::default().render(&table));
    }

    let flagged = rows.iter().filter(|(_, tips)| tips.top.note.is_some()).count();
    info!("{} of {} fixtures below the edge threshold", flagged, rows.len());
    Ok(())
}
