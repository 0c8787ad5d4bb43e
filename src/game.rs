use crate::{
    board::Board,
    common::BoardError,
    player::{Cell, Player, Position},
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Won(Player),
    Draw,
}

/// Whose move it is, kept apart from cell emptiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// No move made yet; X opens.
    #[default]
    Pending,
    ToMove(Player),
    Finished(Outcome),
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Serializable game snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub turn: Turn,
}

/// One game instance: the board plus the turn state machine.
///
/// Drivers call [`GameEngine::play`] for every move so that each mark goes
/// through [`Board::mark`] and the outcome is recomputed afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Turn,
}

impl GameEngine {
    /// Create a new engine with an empty board and X to open.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Pending,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The player expected to move next, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.turn {
            Turn::Pending => Some(Player::X),
            Turn::ToMove(p) => Some(p),
            Turn::Finished(_) => None,
        }
    }

    /// Mark `pos` for the player to move and advance the state machine.
    ///
    /// A rejected move leaves both the board and the turn unchanged.
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, BoardError> {
        let player = self.to_move().ok_or(BoardError::GameOver)?;
        self.board.mark(pos, player)?;
        self.turn = match evaluate(&self.board) {
            Some(outcome) => Turn::Finished(outcome),
            None => Turn::ToMove(player.opponent()),
        };
        Ok(self.status())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match self.turn {
            Turn::Finished(Outcome::Won(p)) => GameStatus::Won(p),
            Turn::Finished(Outcome::Draw) => GameStatus::Draw,
            Turn::Pending | Turn::ToMove(_) => GameStatus::InProgress,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.turn, Turn::Finished(_))
    }

    /// Clear the board and return to the initial state.
    pub fn restart(&mut self) {
        self.board.reset();
        self.turn = Turn::Pending;
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            turn: self.turn,
        }
    }

    /// Restore an engine from a snapshot, rejecting turns that could not
    /// have produced the board.
    pub fn from_state(state: GameState) -> Result<Self, BoardError> {
        let board = state.board;
        let xs = board.count(Player::X);
        let os = board.count(Player::O);
        let balanced = xs == os || xs == os + 1;
        let both_won = board.has_line(Player::X) && board.has_line(Player::O);
        let consistent = balanced
            && !both_won
            && match (state.turn, evaluate(&board)) {
                (Turn::Pending, None) => xs == 0,
                (Turn::ToMove(Player::X), None) => xs == os && xs > 0,
                (Turn::ToMove(Player::O), None) => xs == os + 1,
                (Turn::Finished(Outcome::Won(Player::X)), Some(Outcome::Won(Player::X))) => {
                    xs == os + 1
                }
                (Turn::Finished(Outcome::Won(Player::O)), Some(Outcome::Won(Player::O))) => {
                    xs == os
                }
                (Turn::Finished(Outcome::Draw), Some(Outcome::Draw)) => true,
                _ => false,
            };
        if !consistent {
            return Err(BoardError::InconsistentState);
        }
        Ok(Self {
            board,
            turn: state.turn,
        })
    }
}

/// Terminal outcome of `board`, checking for a winner before a draw.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    match board.winner() {
        Cell::Taken(p) => Some(Outcome::Won(p)),
        Cell::Empty if board.is_draw() => Some(Outcome::Draw),
        Cell::Empty => None,
    }
}
