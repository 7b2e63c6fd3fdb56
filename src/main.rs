use clap::Parser;
use dodger::config::{self, WINDOW_HEIGHT, WINDOW_WIDTH};
use dodger::game::Game;
use dodger::logging;
use dodger::render::Renderer;
use log::{LevelFilter, error, info};
use macroquad::prelude::*;
use std::process;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting offset of the dodger in pixels from the left edge (0 to 360).
    #[arg(
        long,
        default_value_t = config::DEFAULT_START_LEFT,
        value_parser = clap::value_parser!(i32).range(0..=config::MAX_LEFT as i64)
    )]
    start: i32,

    /// Debug filter to specify log topics (e.g., "controller,input,surface")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Dodger".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Dodger...");
    let mut game = Game::new(args.start);
    let mut renderer = Renderer::new();

    if let Err(e) = game.run(&mut renderer).await {
        error!("Game loop failed: {}", e);
        process::exit(1);
    }
}
