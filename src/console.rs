//! Line-oriented console frontend for the range-move protocol.

use crate::games::markers::{Command, GameEngine, MarkerGame, Outcome, Position};
use crate::roster::PlayerNames;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Read-evaluate-print loop over arbitrary input and output handles.
pub struct Console<'a, R, W> {
    engine: &'a mut GameEngine,
    names: &'a PlayerNames,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Wraps an engine and a pair of I/O handles.
    pub fn new(engine: &'a mut GameEngine, names: &'a PlayerNames, input: R, output: W) -> Self {
        Self {
            engine,
            names,
            input,
            output,
        }
    }

    /// Plays matches until the input runs dry or the players decline a rematch.
    ///
    /// Returns the outcome of the last finished match, if any.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        let mut last = None;
        loop {
            match self.play_match()? {
                Some(outcome) => last = Some(outcome),
                None => return Ok(last),
            }
            if !self.ask_rematch()? {
                return Ok(last);
            }
            self.engine.reset_board();
        }
    }

    /// Plays one match; `None` means input ended first.
    fn play_match(&mut self) -> Result<Option<Outcome>> {
        loop {
            write!(self.output, "\n{}", self.engine.board())?;

            if let Some(outcome) = self.engine.outcome() {
                writeln!(
                    self.output,
                    "Game over! {} took the last marker. {} wins!",
                    self.names.name(outcome.loser()),
                    self.names.name(outcome.winner())
                )?;
                info!(%outcome, "Match finished");
                return Ok(Some(outcome));
            }

            let name = self.names.name(self.engine.active_player()).to_string();
            let Some(from) = self.read_position(&format!("{}, remove from (row col): ", name))?
            else {
                return Ok(None);
            };
            let Some(to) = self.read_position("              to (row col): ")? else {
                return Ok(None);
            };

            match self.engine.apply(Command::Range { from, to }) {
                Ok(report) => {
                    debug!(removed = report.removed.len(), "Move accepted");
                }
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(self.output, "Illegal move: {}", e)?;
                }
            }
        }
    }

    /// Prompts until a well-formed position arrives; `None` on end of input.
    fn read_position(&mut self, prompt: &str) -> Result<Option<Position>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.parse::<Position>() {
                Ok(pos) => return Ok(Some(pos)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn ask_rematch(&mut self) -> Result<bool> {
        let answer = self.prompt("Play again? (y/n): ")?;
        Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::markers::{MoveProtocol, Player};

    fn play(size: usize, script: &str) -> (Option<Outcome>, String, GameEngine) {
        let mut engine = GameEngine::new(size, MoveProtocol::Range).unwrap();
        let names = PlayerNames::default();
        let mut output = Vec::new();
        let outcome = Console::new(&mut engine, &names, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        (outcome, String::from_utf8(output).unwrap(), engine)
    }

    #[test]
    fn test_full_match_on_two_by_two() {
        let (outcome, output, _) = play(2, "0 0\n0 1\n1 0\n1 1\nn\n");
        let outcome = outcome.unwrap();
        assert_eq!(outcome.loser(), Player::Player2);
        assert!(output.contains("Player 1 wins!"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let (outcome, output, engine) = play(3, "zero zero\n0 0\n0 2\n");
        assert!(outcome.is_none());
        assert!(output.contains("not a non-negative integer"));
        assert_eq!(engine.board().present_count(), 6);
        assert_eq!(engine.active_player(), Player::Player2);
    }

    #[test]
    fn test_illegal_move_reported() {
        let (_, output, engine) = play(3, "0 0\n1 1\n");
        assert!(output.contains("Illegal move"));
        assert_eq!(engine.active_player(), Player::Player1);
    }

    #[test]
    fn test_board_rendered_as_digits() {
        let (_, output, _) = play(2, "0 0\n0 0\n");
        assert!(output.contains("0 1\n1 1\n"));
    }

    #[test]
    fn test_rematch_keeps_alternation() {
        let (_, _, engine) = play(1, "0 0\n0 0\ny\n");
        // Player 1 took the only marker, so Player 2 opens the rematch.
        assert_eq!(engine.board().present_count(), 1);
        assert_eq!(engine.active_player(), Player::Player2);
    }
}
