//! Gomoku GUI
//!
//! Two players share the mouse; left click places a stone.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, GameSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gomoku", about = "Two-player five in a row")]
struct Cli {
    /// TOML config file; defaults are used if it does not exist
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Cells per board side
    #[arg(long)]
    size: Option<usize>,

    /// Pixel size of one cell
    #[arg(long)]
    cell_size: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(cell_size) = cli.cell_size {
        config.cell_size = cell_size;
    }
    config.validate()?;

    let session = GameSession::new(&config).context("creating board")?;
    info!("Welcome to the ultimate Gomoku match! Left click any point of the board to start.");

    let side = config.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side, side])
            .with_resizable(false)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, session)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
