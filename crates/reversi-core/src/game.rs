//! Turn driver connecting a [`GameState`] with two [`Player`]s.

use crate::board::Board;
use crate::disc::Side;
use crate::error::{GameError, MoveError};
use crate::game_state::{GameState, GameStatus, Outcome};
use crate::move_list::Move;
use crate::player::Player;

/// Notification emitted by [`Game::step`] and [`Game::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// `Side` is about to move.
    TurnStarted(Side),
    /// A placement was applied.
    Played(Move),
    /// The side had no placement and passed.
    Passed(Side),
    /// The active player submitted an illegal move and is asked again.
    Rejected(MoveError),
    /// The game is over.
    Finished(Outcome),
}

/// A game between two players. Black moves first.
pub struct Game {
    state: GameState,
    black: Box<dyn Player>,
    white: Box<dyn Player>,
}

impl Game {
    /// Creates a game in the initial position.
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>) -> Game {
        Game::from_state(GameState::new(), black, white)
    }

    /// Creates a game continuing from `state`.
    pub fn from_state(state: GameState, black: Box<dyn Player>, white: Box<dyn Player>) -> Game {
        Game {
            state,
            black,
            white,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::Black => self.black.as_mut(),
            Side::White => self.white.as_mut(),
        }
    }

    /// Notifies both players of an applied move.
    fn broadcast(&mut self, mv: &Move) {
        let board = *self.state.board();
        self.black.acknowledge_turn(mv, &board);
        self.white.acknowledge_turn(mv, &board);
    }

    /// Plays one turn.
    ///
    /// A side without a placement passes automatically. Otherwise the active
    /// player is asked for moves until it submits a legal one; every rejected
    /// submission is reported as [`GameEvent::Rejected`].
    ///
    /// The observer receives each event with the board after the event.
    ///
    /// # Returns
    ///
    /// `Ok(Some(outcome))` once the game is over, `Ok(None)` after a regular
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Aborted` if the active player withdraws.
    pub fn step<F>(&mut self, observer: &mut F) -> Result<Option<Outcome>, GameError>
    where
        F: FnMut(&GameEvent, &Board),
    {
        let side = match self.state.status() {
            GameStatus::Terminal(outcome) => {
                observer(&GameEvent::Finished(outcome), self.state.board());
                return Ok(Some(outcome));
            }
            GameStatus::ToMove(side) => side,
        };
        observer(&GameEvent::TurnStarted(side), self.state.board());

        if self.state.must_pass() {
            let pass = Move::pass(side);
            self.state
                .play(&pass)
                .expect("a blocked side must be able to pass when the game is not over");
            self.broadcast(&pass);
            observer(&GameEvent::Passed(side), self.state.board());
            return Ok(None);
        }

        let mv = loop {
            let snapshot = *self.state.board();
            let Some(mv) = self.player_mut(side).choose_move(&snapshot) else {
                return Err(GameError::Aborted(side));
            };
            match self.state.play(&mv) {
                Ok(()) => break mv,
                Err(err) => observer(&GameEvent::Rejected(err), self.state.board()),
            }
        };
        self.broadcast(&mv);
        observer(&GameEvent::Played(mv), self.state.board());
        Ok(None)
    }

    /// Plays the game to the end.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Aborted` if a player withdraws.
    pub fn run<F>(&mut self, mut observer: F) -> Result<Outcome, GameError>
    where
        F: FnMut(&GameEvent, &Board),
    {
        loop {
            if let Some(outcome) = self.step(&mut observer)? {
                return Ok(outcome);
            }
        }
    }
}
