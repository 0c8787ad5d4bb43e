use tictactoe::{Board, BoardError, Cell, GameEngine, GameStatus, Player, Position};

fn mark_all(board: &mut Board, moves: &[((i32, i32), Player)]) {
    for &((r, c), p) in moves {
        board.mark(Position::new(r, c), p).unwrap();
    }
}

#[test]
fn test_top_row_win() {
    let mut board = Board::new();
    mark_all(
        &mut board,
        &[
            ((0, 0), Player::X),
            ((1, 1), Player::O),
            ((0, 1), Player::X),
            ((1, 0), Player::O),
            ((0, 2), Player::X),
        ],
    );
    assert_eq!(board.winner(), Cell::Taken(Player::X));
    assert!(!board.is_draw());
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let mut board = Board::new();
    mark_all(
        &mut board,
        &[
            ((0, 0), Player::X),
            ((0, 1), Player::O),
            ((0, 2), Player::X),
            ((1, 0), Player::X),
            ((1, 1), Player::O),
            ((1, 2), Player::O),
            ((2, 0), Player::O),
            ((2, 1), Player::X),
            ((2, 2), Player::X),
        ],
    );
    assert_eq!(board.open_positions().count(), 0);
    assert_eq!(board.winner(), Cell::Empty);
    assert!(board.is_draw());
}

#[test]
fn test_out_of_bounds_mark_leaves_board_untouched() {
    let mut board = Board::new();
    board.mark(Position::new(1, 1), Player::O).unwrap();
    let before = board;
    assert_eq!(
        board.mark(Position::new(3, 0), Player::X),
        Err(BoardError::OutOfBounds(Position::new(3, 0)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_occupied_mark_keeps_existing_owner() {
    let mut board = Board::new();
    board.mark(Position::new(2, 1), Player::X).unwrap();
    for p in [Player::X, Player::O] {
        assert_eq!(
            board.mark(Position::new(2, 1), p),
            Err(BoardError::CellOccupied(Position::new(2, 1)))
        );
    }
    assert_eq!(board.get(Position::new(2, 1)), Ok(Cell::Taken(Player::X)));
}

#[test]
fn test_can_move() {
    let mut board = Board::new();
    assert_eq!(board.can_move(Position::new(0, 0)), Ok(true));
    board.mark(Position::new(0, 0), Player::X).unwrap();
    assert_eq!(board.can_move(Position::new(0, 0)), Ok(false));
    assert_eq!(
        board.can_move(Position::new(0, 3)),
        Err(BoardError::OutOfBounds(Position::new(0, 3)))
    );
}

#[test]
fn test_open_positions_row_major() {
    let mut board = Board::new();
    board.mark(Position::new(0, 1), Player::X).unwrap();
    board.mark(Position::new(2, 0), Player::O).unwrap();
    let open: Vec<_> = board
        .open_positions()
        .map(|p| (p.row, p.col))
        .collect();
    assert_eq!(
        open,
        vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 2)]
    );
}

#[test]
fn test_last_move_fills_board_and_wins() {
    // X O X / O X O / O X _ ; X takes (2,2) completing the main diagonal
    // on the ninth move.
    let mut engine = GameEngine::new();
    let moves = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0)];
    for (r, c) in moves {
        assert_eq!(engine.play(Position::new(r, c)), Ok(GameStatus::InProgress));
    }
    assert_eq!(
        engine.play(Position::new(2, 2)),
        Ok(GameStatus::Won(Player::X))
    );
    assert_eq!(engine.board().open_positions().count(), 0);
    assert!(!engine.board().is_draw());
}

#[test]
fn test_engine_rejects_moves_after_game_over() {
    let mut engine = GameEngine::new();
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.play(Position::new(r, c)).unwrap();
    }
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    let before = *engine.board();
    assert_eq!(engine.play(Position::new(2, 2)), Err(BoardError::GameOver));
    assert_eq!(*engine.board(), before);
    assert_eq!(engine.to_move(), None);
}

#[test]
fn test_restart_returns_to_initial_state() {
    let mut engine = GameEngine::new();
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.play(Position::new(r, c)).unwrap();
    }
    engine.restart();
    assert_eq!(engine, GameEngine::new());
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.to_move(), Some(Player::X));
}
