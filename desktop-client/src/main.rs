mod app;

use std::path::Path;
use std::time::Instant;

use clap::Parser;
use snake_core::engine::GameEngine;
use snake_core::rng::SessionRng;
use snake_core::{log, logger, GameConfig};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Optional YAML config overriding the built-in constants.
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match &args.config {
        Some(path) => GameConfig::load(Path::new(path))?,
        None => GameConfig::default(),
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let screen = [config.screen_width as f32, config.screen_height as f32];
    let engine = GameEngine::new(config, rng, Instant::now());

    log!("Starting snake client ({}x{})", screen[0], screen[1]);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(screen)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(app::ClientApp::new(engine)))),
    )?;

    Ok(())
}
