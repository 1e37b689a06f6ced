//! Human player reading moves from the terminal.

use colored::Colorize;
use reversi_core::board::Board;
use reversi_core::disc::Side;
use reversi_core::move_list::Move;
use reversi_core::player::Player;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::display;
use crate::parse::{Command, parse_command};

pub struct HumanPlayer {
    side: Side,
    editor: DefaultEditor,
    /// The opponent's last move, shown in the prompt.
    opponent_move: Option<Move>,
}

impl HumanPlayer {
    pub fn new(side: Side) -> anyhow::Result<Self> {
        Ok(HumanPlayer {
            side,
            editor: DefaultEditor::new()?,
            opponent_move: None,
        })
    }

    fn prompt(&self) -> String {
        match self.opponent_move {
            Some(mv) => format!("{} [{} played {mv}]> ", self.side, self.side.opposite()),
            None => format!("{}> ", self.side),
        }
    }
}

impl Player for HumanPlayer {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let prompt = self.prompt();
        loop {
            let line = match self.editor.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => return None,
                Err(err) => {
                    eprintln!("Error: {err}");
                    return None;
                }
            };
            let _ = self.editor.add_history_entry(line.as_str());

            match parse_command(&line) {
                Ok(Command::Play(sq)) => return Some(Move::new(sq, self.side)),
                Ok(Command::Moves) => display::print_moves(board, self.side),
                Ok(Command::Help) => display::print_help(),
                Ok(Command::Quit) => return None,
                Ok(Command::Empty) => {}
                Err(msg) => {
                    eprintln!("{}", msg.bright_red());
                    eprintln!("Type {} for usage", "help".bold());
                }
            }
        }
    }

    fn acknowledge_turn(&mut self, mv: &Move, _board: &Board) {
        if mv.side() != self.side {
            self.opponent_move = Some(*mv);
        }
    }
}
