mod battery;
mod bounds;
mod camera;
mod config;
mod drone;
mod game;
mod hud;
mod input;
mod logging;
mod render;
mod scene;

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use clap::Parser;
use log::{LevelFilter, info};
use macroquad::prelude::*;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for facility generation. Defaults to the wall clock, so every
    /// unseeded run gets a different layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "flight,signal,battery")
    /// Available topics: flight, signal, battery, hud, scene
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "DroneWatch".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize the logger
    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    // Setup logger with debug filters if provided
    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing DroneWatch...");

    let seed = args
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp() as u64);

    // Create the flight session
    let mut game = game::Game::new(seed, get_time()).expect("Failed to create flight session");

    // Initialize the renderer
    let mut renderer = render::Renderer::new(&game.scene);
    info!("Renderer initialized.");

    // Run the flight loop
    game.run(&mut renderer).await.expect("Flight loop failed");
}
