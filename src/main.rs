use clap::Parser;
use javelin::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use javelin::game::Game;
use javelin::logging;
use javelin::render::Renderer;
use javelin::throw_gen::ThrowGenerator;
use log::{info, warn};
use macroquad::prelude::*;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player javelin throw, first to three round wins", long_about = None)]
struct Args {
    /// Seed for throw distances; omit for a fresh random match.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "throw,round")
    /// Available topics: throw, anim, round, match, input
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Javelin Throw".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(logging::parse_level(&args.log_level), args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    if let Some(filter) = &args.debug_filter {
        for topic in filter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !logging::TOPICS.contains(&topic) {
                warn!("Unknown debug topic '{}' (known: {})", topic, logging::TOPICS.join(", "));
            }
        }
    }

    info!("Initializing Javelin Throw...");
    let distances = match args.seed {
        Some(seed) => {
            info!("Using throw seed {}", seed);
            ThrowGenerator::with_seed(seed)
        }
        None => ThrowGenerator::new(),
    };

    let mut game = Game::new(distances);
    let mut renderer = Renderer::new();
    game.run(&mut renderer).await;
}
