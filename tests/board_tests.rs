use connect_four::{Board, Cell, Direction, Piece, COLS, ROWS};

/// Column drops (0-based) for a full board where neither piece ever lines up
/// four. Moves alternate X, O, X, ...
const DRAW_SEQUENCE: [usize; 42] = [
    5, 4, 5, 0, 6, 2, 4, 5, 5, 0, 4, 1, 1, 0, 4, 5, 6, 5, 3, 1, 1, 2, 2, 6, 2, 6, 6, 3, 6, 2, 0,
    3, 0, 3, 3, 4, 3, 1, 4, 2, 1, 0,
];

fn drop_all(board: &mut Board, drops: &[(usize, Piece)]) {
    for &(col, piece) in drops {
        board.drop_piece(col, piece).unwrap();
    }
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            assert_eq!(board.get(row, col), Cell::Empty);
        }
    }
    for col in 0..COLS {
        assert!(!board.is_column_full(col));
    }
    assert!(!board.is_full());
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_drop_fills_column_bottom_up() {
    let mut board = Board::new();
    let pieces = [Piece::X, Piece::O, Piece::O, Piece::X, Piece::X, Piece::O];
    for (n, &piece) in pieces.iter().enumerate() {
        assert!(!board.is_column_full(3));
        assert_eq!(board.drop_piece(3, piece), Some(ROWS - 1 - n));
    }
    for (n, &piece) in pieces.iter().enumerate() {
        assert_eq!(board.get(ROWS - 1 - n, 3), Cell::Occupied(piece));
    }
    assert!(board.is_column_full(3));

    // seventh drop is a no-op
    let before = board;
    assert_eq!(board.drop_piece(3, Piece::X), None);
    assert_eq!(board, before);
    assert_eq!(board.piece_count(), ROWS);
}

#[test]
fn test_no_win_on_empty_board() {
    let board = Board::new();
    assert!(!board.check_win(Piece::X));
    assert!(!board.check_win(Piece::O));
    assert_eq!(board.find_run(Piece::X), None);
}

#[test]
fn test_horizontal_win() {
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[(0, Piece::X), (1, Piece::X), (2, Piece::X), (3, Piece::X)],
    );
    assert!(board.check_win(Piece::X));
    assert!(!board.check_win(Piece::O));

    let run = board.find_run(Piece::X).unwrap();
    assert_eq!(run.direction, Direction::Horizontal);
    assert_eq!(run.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
}

#[test]
fn test_three_in_a_row_is_not_a_win() {
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[(0, Piece::X), (1, Piece::X), (2, Piece::X), (3, Piece::O), (4, Piece::X)],
    );
    assert!(!board.check_win(Piece::X));
}

#[test]
fn test_vertical_win() {
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[(0, Piece::O), (0, Piece::O), (0, Piece::X), (0, Piece::X)],
    );
    assert!(!board.check_win(Piece::X));
    drop_all(&mut board, &[(0, Piece::X), (0, Piece::X)]);
    // X now at column 0, rows 3..=0 above the two O pieces
    assert!(board.check_win(Piece::X));
    let run = board.find_run(Piece::X).unwrap();
    assert_eq!(run.direction, Direction::Vertical);
    assert_eq!(run.cells, [(0, 0), (1, 0), (2, 0), (3, 0)]);

    let mut board = Board::new();
    drop_all(
        &mut board,
        &[(0, Piece::O), (0, Piece::O), (0, Piece::X), (0, Piece::X), (0, Piece::X)],
    );
    assert!(!board.check_win(Piece::X));
}

#[test]
fn test_vertical_win_at_bottom() {
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[(0, Piece::X), (0, Piece::X), (0, Piece::X), (0, Piece::X)],
    );
    // column 0, rows 2..=5
    assert_eq!(board.get(2, 0), Cell::Occupied(Piece::X));
    assert!(board.check_win(Piece::X));
}

/// X at (5,0), (4,1), (3,2), (2,3) with O pieces propping them up.
fn rising_diagonal(third: Piece) -> Board {
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[
            (0, Piece::X),
            (1, Piece::O),
            (1, Piece::X),
            (2, Piece::O),
            (2, Piece::O),
            (2, third),
            (3, Piece::O),
            (3, Piece::O),
            (3, Piece::O),
            (3, Piece::X),
        ],
    );
    board
}

#[test]
fn test_diagonal_down_left_win() {
    let board = rising_diagonal(Piece::X);
    assert_eq!(board.get(5, 0), Cell::Occupied(Piece::X));
    assert_eq!(board.get(4, 1), Cell::Occupied(Piece::X));
    assert_eq!(board.get(3, 2), Cell::Occupied(Piece::X));
    assert_eq!(board.get(2, 3), Cell::Occupied(Piece::X));
    assert!(board.check_win(Piece::X));
    assert!(!board.check_win(Piece::O));

    let run = board.find_run(Piece::X).unwrap();
    assert_eq!(run.direction, Direction::DiagonalDownLeft);
    assert_eq!(run.cells, [(2, 3), (3, 2), (4, 1), (5, 0)]);
}

#[test]
fn test_broken_diagonal_is_not_a_win() {
    let board = rising_diagonal(Piece::O);
    assert!(!board.check_win(Piece::X));
    assert!(!board.check_win(Piece::O));

    // gap instead of an opposing piece
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[
            (0, Piece::X),
            (1, Piece::O),
            (1, Piece::X),
            (2, Piece::O),
            (2, Piece::O),
            (3, Piece::O),
            (3, Piece::O),
            (3, Piece::O),
            (3, Piece::X),
        ],
    );
    assert_eq!(board.get(3, 2), Cell::Empty);
    assert!(!board.check_win(Piece::X));
}

#[test]
fn test_diagonal_down_right_win() {
    let mut board = Board::new();
    drop_all(
        &mut board,
        &[
            (6, Piece::X),
            (5, Piece::O),
            (5, Piece::X),
            (4, Piece::O),
            (4, Piece::O),
            (4, Piece::X),
            (3, Piece::O),
            (3, Piece::O),
            (3, Piece::O),
            (3, Piece::X),
        ],
    );
    assert!(board.check_win(Piece::X));
    let run = board.find_run(Piece::X).unwrap();
    assert_eq!(run.direction, Direction::DiagonalDownRight);
    assert_eq!(run.cells, [(2, 3), (3, 4), (4, 5), (5, 6)]);
}

#[test]
fn test_run_does_not_wrap_around_rows() {
    let mut board = Board::new();
    // X at (4,5), (4,6), (5,0), (5,1): consecutive only in row-major order
    drop_all(
        &mut board,
        &[
            (5, Piece::O),
            (5, Piece::X),
            (6, Piece::O),
            (6, Piece::X),
            (0, Piece::X),
            (1, Piece::X),
        ],
    );
    assert!(!board.check_win(Piece::X));
    assert!(!board.check_win(Piece::O));
}

#[test]
fn test_full_board_without_run_is_draw() {
    let mut board = Board::new();
    let mut piece = Piece::X;
    for &col in DRAW_SEQUENCE.iter() {
        assert!(!board.is_full());
        board.drop_piece(col, piece).unwrap();
        piece = if piece == Piece::X { Piece::O } else { Piece::X };
    }
    assert!(board.is_full());
    assert_eq!(board.piece_count(), ROWS * COLS);
    assert_eq!(board.legal_columns().count(), 0);
    assert!(!board.check_win(Piece::X));
    assert!(!board.check_win(Piece::O));
}

#[test]
fn test_legal_columns_skip_full_columns() {
    let mut board = Board::new();
    for _ in 0..ROWS {
        board.drop_piece(2, Piece::O).unwrap();
    }
    let legal: Vec<usize> = board.legal_columns().collect();
    assert_eq!(legal, vec![0, 1, 3, 4, 5, 6]);
}

#[test]
fn test_clear_resets_board() {
    let mut board = Board::new();
    board.drop_piece(0, Piece::X).unwrap();
    board.clear();
    assert_eq!(board, Board::default());
}

#[test]
fn test_render_snapshot() {
    let mut board = Board::new();
    board.drop_piece(0, Piece::X).unwrap();
    board.drop_piece(0, Piece::O).unwrap();
    board.drop_piece(6, Piece::X).unwrap();

    let expected = "\
. . . . . . .
. . . . . . .
. . . . . . .
. . . . . . .
O . . . . . .
X . . . . . X
1 2 3 4 5 6 7
";
    assert_eq!(board.render(), expected);
    assert_eq!(board.to_string(), expected);
}

#[test]
#[should_panic]
fn test_out_of_range_column_panics() {
    let board = Board::new();
    board.is_column_full(COLS);
}
