#![cfg(feature = "std")]

//! Text console front end: reads 1-indexed coordinates, prints the grid.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, bail};
use log::{debug, info};

use crate::{Board, BoardError, GameEngine, GameStatus, Position};

/// Render the grid as `X | O | X` rows separated by dashed lines.
pub fn present_board(board: &Board) -> String {
    board.to_string()
}

/// Blocking read-input-apply-move loop over any reader/writer pair.
pub struct ConsoleDriver<R, W> {
    input: R,
    output: W,
    engine: GameEngine,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            engine: GameEngine::new(),
            tokens: VecDeque::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play one game to its end and return the final status.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        info!("console game started");
        writeln!(self.output, "Welcome to TicTacToe!")?;

        while let Some(player) = self.engine.to_move() {
            writeln!(self.output, "\n{}\n", present_board(self.engine.board()))?;
            write!(self.output, "{}'s turn: ", player)?;
            self.output.flush()?;

            loop {
                let Some(pos) = self.read_position()? else {
                    debug!("unparsable coordinates");
                    writeln!(self.output, "Invalid position, please try again")?;
                    continue;
                };
                match self.engine.play(pos) {
                    Ok(_) => {
                        debug!("{} marked {}", player, pos);
                        break;
                    }
                    Err(BoardError::OutOfBounds(_)) => {
                        debug!("rejected out of bounds move {}", pos);
                        writeln!(self.output, "Invalid position, please try again")?;
                    }
                    Err(BoardError::CellOccupied(_)) => {
                        debug!("rejected move on occupied cell {}", pos);
                        writeln!(self.output, "Position already occupied, please try again")?;
                    }
                    Err(e) => return Err(anyhow!(e)),
                }
            }
        }

        writeln!(self.output, "\n{}\n", present_board(self.engine.board()))?;
        let status = self.engine.status();
        match status {
            GameStatus::Won(p) => writeln!(self.output, "{} has won! Congratulations!!!", p)?,
            _ => writeln!(self.output, "Nobody won...")?,
        }
        self.output.flush()?;
        info!("console game finished: {:?}", status);
        Ok(status)
    }

    // Next two tokens as a 0-indexed position; `None` if either is not an integer.
    fn read_position(&mut self) -> anyhow::Result<Option<Position>> {
        while self.tokens.len() < 2 {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before the game finished");
            }
            self.tokens
                .extend(line.split_whitespace().map(String::from));
        }
        let row = self.tokens.pop_front().and_then(|t| t.parse::<i32>().ok());
        let col = self.tokens.pop_front().and_then(|t| t.parse::<i32>().ok());
        Ok(row.zip(col).map(|(r, c)| Position::from_one_based(r, c)))
    }
}
