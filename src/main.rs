use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use trivia::core::bank::QuestionBank;
use trivia::core::config::{self, CliOverrides, TriviaConfig};
use trivia::core::curve::DifficultyCurve;
use trivia::core::pool::QuestionPool;
use trivia::core::sequencer::GameSequencer;

#[derive(Parser)]
#[command(name = "trivia", about = "Single-player trivia in the terminal")]
struct Args {
    /// Seed for question selection (same seed, same game)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds to show the answer before moving on
    #[arg(long)]
    reveal_delay_ms: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to trivia.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("trivia.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        TriviaConfig::default()
    });
    let settings = config::resolve(
        &file_config,
        CliOverrides {
            seed: args.seed,
            reveal_delay_ms: args.reveal_delay_ms,
        },
    );
    log::info!("Trivia starting up with {:?}", settings);

    let bank = QuestionBank::standard()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    log::info!("Loaded {} questions", bank.len());

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pool = QuestionPool::new(Arc::new(bank), rng);
    let curve = DifficultyCurve::new(settings.questions_to_win);
    let game = GameSequencer::new(pool, curve);

    trivia::tui::run(game, Duration::from_millis(settings.reveal_delay_ms))
}
