use tictactoe::{Board, BoardError, Cell, GameEngine, GameState, Outcome, Player, Position, Turn};
use proptest::prelude::*;

proptest! {
    #[test]
    fn game_state_roundtrip(order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(), moves in 0usize..10) {
        let mut engine = GameEngine::new();
        for &i in order.iter().take(moves) {
            if engine.is_finished() {
                break;
            }
            engine.play(Position::new((i / 3) as i32, (i % 3) as i32)).unwrap();
        }
        let state = engine.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: GameState = bincode::deserialize(&bytes).unwrap();
        let restored = GameEngine::from_state(decoded).unwrap();
        prop_assert_eq!(engine.state(), restored.state());
    }
}

#[test]
fn cells_serialize_as_marker_bytes() {
    let mut board = Board::new();
    board.mark(Position::new(0, 0), Player::X).unwrap();
    board.mark(Position::new(2, 2), Player::O).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#"{"cells":[[88,0,0],[0,0,0],[0,0,79]]}"#);
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn corrupted_cell_is_rejected_on_deserialize() {
    let json = r#"{"cells":[[88,0,0],[0,42,0],[0,0,79]]}"#;
    let err = serde_json::from_str::<Board>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid player value, 42"));

    let mut bytes = bincode::serialize(&Board::new()).unwrap();
    bytes[4] = b'Z';
    assert!(bincode::deserialize::<Board>(&bytes).is_err());
}

#[test]
fn corrupted_player_in_turn_is_rejected() {
    let state = GameEngine::new().state();
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.ends_with(r#""turn":"Pending"}"#));
    let bad = json.replace(r#""turn":"Pending""#, r#""turn":{"ToMove":1}"#);
    assert!(serde_json::from_str::<GameState>(&bad).is_err());
    let good = json.replace(r#""turn":"Pending""#, r#""turn":{"ToMove":79}"#);
    let decoded: GameState = serde_json::from_str(&good).unwrap();
    assert_eq!(decoded.turn, Turn::ToMove(Player::O));
    // O to move on an empty board never happens in play
    assert_eq!(
        GameEngine::from_state(decoded),
        Err(BoardError::InconsistentState)
    );
}

#[test]
fn raw_grid_roundtrip() {
    let raw = [[b'X', 0, b'O'], [0, b'X', 0], [b'O', 0, 0]];
    let board = Board::try_from(raw).unwrap();
    assert_eq!(board.get(Position::new(0, 2)), Ok(Cell::Taken(Player::O)));
    assert_eq!(<[[u8; 3]; 3]>::from(&board), raw);
}

#[test]
fn unreachable_boards_are_rejected_on_restore() {
    const X: u8 = b'X';
    const O: u8 = b'O';
    const E: u8 = 0;
    let cases = [
        // five X marks, no O
        ([[X, X, X], [X, X, E], [E, E, E]], Turn::Finished(Outcome::Won(Player::X))),
        // both players hold a line
        ([[O, O, O], [X, X, X], [E, E, E]], Turn::Finished(Outcome::Won(Player::O))),
        // O won but X moved last
        ([[O, O, O], [X, X, E], [X, E, X]], Turn::Finished(Outcome::Won(Player::O))),
        // X won but O moved last
        ([[X, X, X], [O, O, E], [O, E, E]], Turn::Finished(Outcome::Won(Player::X))),
        // only Pending describes an empty board
        ([[E, E, E], [E, E, E], [E, E, E]], Turn::ToMove(Player::X)),
        // O ahead of X
        ([[O, E, E], [E, E, E], [E, E, E]], Turn::ToMove(Player::X)),
    ];
    for (raw, turn) in cases {
        let state = GameState {
            board: Board::try_from(raw).unwrap(),
            turn,
        };
        assert_eq!(
            GameEngine::from_state(state),
            Err(BoardError::InconsistentState),
            "{:?}",
            raw
        );
    }

    // the same shapes reached by legal play restore fine
    let won_x = GameState {
        board: Board::try_from([[X, X, X], [O, O, E], [E, E, E]]).unwrap(),
        turn: Turn::Finished(Outcome::Won(Player::X)),
    };
    assert!(GameEngine::from_state(won_x).is_ok());
    let won_o = GameState {
        board: Board::try_from([[O, O, O], [X, X, E], [X, E, E]]).unwrap(),
        turn: Turn::Finished(Outcome::Won(Player::O)),
    };
    assert!(GameEngine::from_state(won_o).is_ok());
}
