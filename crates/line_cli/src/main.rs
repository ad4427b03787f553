//! Line Sim CLI
//!
//! Replays a scripted game against a roster config and prints the board
//! after every step.

mod render;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use line_core::{api, Game, GameConfig};

#[derive(Parser)]
#[command(name = "line_sim")]
#[command(about = "Replay a scripted game and print the called lines", long_about = None)]
struct Cli {
    /// Game config (YAML): team names, ratio policy, seed roster
    #[arg(long)]
    config: PathBuf,

    /// Script of steps (YAML list). Without it only the opening board is printed
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the board as JSON instead of text
    #[arg(long, default_value = "false")]
    json: bool,

    /// Stop at the first rejected step instead of reporting and continuing
    #[arg(long, default_value = "false")]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.config)
        .with_context(|| format!("failed to read config {}", cli.config.display()))?;
    let config = GameConfig::from_yaml_str(&text)?;
    let mut game = Game::new(config)?;

    let steps = match &cli.script {
        Some(path) => script::load_script(path)?,
        None => Vec::new(),
    };
    log::info!("Loaded {} players and {} steps", game.roster().len(), steps.len());

    print_board(&game, cli.json)?;
    for (idx, step) in steps.iter().enumerate() {
        println!("\n#{} {:?}", idx + 1, step);
        let outcome = script::to_command(&game, step)
            .and_then(|command| api::apply_command(&mut game, command).map_err(Into::into));
        match outcome {
            Ok(_) => print_board(&game, cli.json)?,
            Err(err) if !cli.strict => println!("  rejected: {}", err),
            Err(err) => return Err(err.context(format!("step #{} failed", idx + 1))),
        }
    }

    Ok(())
}

fn print_board(game: &Game, json: bool) -> Result<()> {
    if json {
        println!("{}", api::board_json(game)?);
    } else {
        println!("{}", render::board(&api::BoardView::from_game(game)));
    }
    Ok(())
}
