mod config;
mod controller;
mod ui;

use clap::{Parser, ValueEnum};
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::tictactoe::{BotType, ScoringMode};
use tictactoe_common::{log, logger};

use config::{Config, DEFAULT_CONFIG_FILE, MIN_WINDOW_SIZE, get_config_manager};
use controller::GameController;
use ui::TicTacToeApp;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Random,
    Minimax,
}

impl From<BotArg> for BotType {
    fn from(value: BotArg) -> Self {
        match value {
            BotArg::Random => BotType::Random,
            BotArg::Minimax => BotType::Minimax,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides `bot.bot_type` from the config file.
    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Prefer quicker wins and slower losses.
    #[arg(long)]
    depth_weighted: bool,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for the random bot, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(path: &str) -> Config {
    let manager = get_config_manager(path);
    if !std::path::Path::new(path).exists() {
        if let Err(e) = manager.set_config(&Config::default()) {
            log!("Could not write default config to {}: {}", path, e);
        } else {
            log!("Wrote default config to {}", path);
        }
    }
    match manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config from {}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = load_config(&args.config);
    if let Some(bot) = args.bot {
        config.bot.bot_type = bot.into();
    }
    if args.depth_weighted {
        config.bot.scoring_mode = ScoringMode::DepthWeighted;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let controller = GameController::new(&config, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(controller)))),
    )?;

    log!("Client shut down");
    Ok(())
}
