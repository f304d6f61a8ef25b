use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use engine::{GameConfig, GameMode, LevelPolicy, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use server::http_server::run_http_server;
use server::session::GameSession;

#[derive(Parser, Debug)]
#[command(
    name = "snake-server",
    about = "Serve the step-per-request snake game over HTTP"
)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Game mode: classic | leveled
    #[arg(long, default_value = "classic")]
    mode: String,

    /// Playfield width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    /// Playfield height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,

    /// Grid cell size in pixels; must evenly divide width and height
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: i32,

    /// RNG seed for reproducible games; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mode = match args.mode.as_str() {
        "classic" => GameMode::Classic,
        "leveled" => GameMode::Leveled,
        other => bail!("unknown mode {:?}, expected classic or leveled", other),
    };

    let config = GameConfig {
        width: args.width,
        height: args.height,
        cell_size: args.cell_size,
        mode,
        policy: LevelPolicy::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Starting {:?} game session with seed {}", mode, seed);

    let session = Arc::new(Mutex::new(GameSession::new(config, seed)?));
    run_http_server(&args.listen, session).await
}
