mod computer;
mod display;
mod human;
mod parse;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use reversi_core::constants::DEFAULT_DEPTH;
use reversi_core::disc::Side;
use reversi_core::game::Game;
use reversi_core::player::Player;
use reversi_core::search::SearchOptions;
use reversi_core::types::Depth;

use crate::display::Console;
use crate::human::HumanPlayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    /// Moves are read from the terminal
    Human,
    /// Moves are chosen by the search engine
    Cpu,
}

/// Play Reversi in the terminal.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Player controlling Black, who moves first
    #[arg(value_enum, ignore_case = true)]
    black: PlayerKind,

    /// Player controlling White
    #[arg(value_enum, ignore_case = true)]
    white: PlayerKind,

    /// Search depth of computer players in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: Depth,

    /// Prune the search with alpha-beta
    #[arg(long)]
    alpha_beta: bool,

    /// Print search statistics for every computer move
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "Error:".bright_red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = SearchOptions {
        depth: cli.depth,
        alpha_beta: cli.alpha_beta,
    };
    let black = create_player(cli.black, Side::Black, &options, cli.verbose)?;
    let white = create_player(cli.white, Side::White, &options, cli.verbose)?;

    let mut game = Game::new(black, white);
    let mut console = Console::new();
    let result = game.run(|event, board| console.on_event(event, board));
    display::print_transcript(&game.state().transcript());

    if let Err(err) = result {
        println!("{}", err.to_string().bright_yellow());
    }
    Ok(())
}

fn create_player(
    kind: PlayerKind,
    side: Side,
    options: &SearchOptions,
    verbose: bool,
) -> anyhow::Result<Box<dyn Player>> {
    Ok(match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(side)?),
        PlayerKind::Cpu => computer::computer_player(side, options, verbose),
    })
}
