//! Board behaviour tests: placement, fullness, and five-in-a-row detection
//! checked against an independent line-scanning oracle.

use five_in_a_row::{Board, Cell, MoveError, Position, Symbol};
use proptest::prelude::*;

/// Every straight line of the board (rows, columns, both diagonals).
fn lines(size: usize) -> Vec<Vec<Position>> {
    let mut out = Vec::new();
    let n = size as isize;

    for i in 0..size {
        out.push((0..size).map(|j| Position::new(i, j)).collect());
        out.push((0..size).map(|j| Position::new(j, i)).collect());
    }
    for d in -(n - 1)..n {
        let diag: Vec<_> = (0..n)
            .filter_map(|r| {
                let c = r - d;
                (0..n).contains(&c).then(|| Position::new(r as usize, c as usize))
            })
            .collect();
        out.push(diag);
    }
    for s in 0..(2 * n - 1) {
        let anti: Vec<_> = (0..n)
            .filter_map(|r| {
                let c = s - r;
                (0..n).contains(&c).then(|| Position::new(r as usize, c as usize))
            })
            .collect();
        out.push(anti);
    }
    out
}

/// Longest run of `symbol` along any line.
fn longest_run(board: &Board, symbol: Symbol) -> usize {
    lines(board.size())
        .iter()
        .map(|line| {
            let mut best = 0;
            let mut current = 0;
            for &pos in line {
                if board.get(pos) == Some(Cell::Occupied(symbol)) {
                    current += 1;
                    best = best.max(current);
                } else {
                    current = 0;
                }
            }
            best
        })
        .max()
        .unwrap_or(0)
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        2 => Just(Cell::Empty),
        3 => Just(Cell::Occupied(Symbol::X)),
        3 => Just(Cell::Occupied(Symbol::O)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (5usize..10).prop_flat_map(|size| {
        prop::collection::vec(cell_strategy(), size * size).prop_map(move |cells| {
            let mut board = Board::new(size).unwrap();
            for (pos, cell) in Position::all(size).zip(cells) {
                if let Cell::Occupied(symbol) = cell {
                    board.place_sign(pos.row, pos.col, symbol).unwrap();
                }
            }
            board
        })
    })
}

/// Fresh boards of every reasonable size start empty and not full.
#[test]
fn test_fresh_boards_are_empty() {
    for size in 5..=15 {
        let board = Board::new(size).unwrap();
        assert!(!board.is_full());
        assert_eq!(board.empty_count(), size * size);
        assert!(Position::all(size).all(|p| board.get(p) == Some(Cell::Empty)));
    }
}

/// Placing the last empty cell flips `is_full`.
#[test]
fn test_last_placement_fills_board() {
    let mut board = Board::new(5).unwrap();
    for pos in Position::all(5).skip(1) {
        board.place_sign(pos.row, pos.col, Symbol::O).unwrap();
        assert!(!board.is_full());
    }
    board.place_sign(0, 0, Symbol::X).unwrap();
    assert!(board.is_full());
}

/// Occupied-cell failures are repeatable and never mutate the board.
#[test]
fn test_repeated_occupied_failures() {
    let mut board = Board::new(6).unwrap();
    board.place_sign(3, 3, Symbol::X).unwrap();
    let snapshot = board.clone();

    for symbol in [Symbol::X, Symbol::O, Symbol::X] {
        assert_eq!(
            board.place_sign(3, 3, symbol),
            Err(MoveError::OccupiedCell { row: 3, col: 3 })
        );
        assert_eq!(board, snapshot);
    }
}

proptest! {
    /// Five-in-a-row detection agrees with a maximal-run oracle.
    #[test]
    fn prop_five_matches_longest_run(board in board_strategy()) {
        for symbol in Symbol::ALL {
            prop_assert_eq!(board.check_five_in_a_row(symbol), longest_run(&board, symbol) >= 5);
        }
    }

    /// A reported winning window really holds five of the symbol.
    #[test]
    fn prop_found_window_is_five(board in board_strategy()) {
        for symbol in Symbol::ALL {
            if let Some((start, axis)) = board.find_five(symbol) {
                let (d_row, d_col) = axis.delta();
                for k in 0..5 {
                    let pos = start.offset(d_row, d_col, k, board.size()).unwrap();
                    prop_assert_eq!(board.get(pos), Some(Cell::Occupied(symbol)));
                }
            }
        }
    }

    /// Placement on an empty cell succeeds and reads back; a second
    /// placement fails and leaves the board unchanged.
    #[test]
    fn prop_place_then_read(size in 5usize..12, row in 0usize..12, col in 0usize..12) {
        let mut board = Board::new(size).unwrap();
        let result = board.place_sign(row, col, Symbol::O);

        if row < size && col < size {
            prop_assert!(result.is_ok());
            prop_assert_eq!(board.symbol_at(row, col), Ok(Cell::Occupied(Symbol::O)));

            let before = board.clone();
            prop_assert!(board.place_sign(row, col, Symbol::X).is_err());
            prop_assert_eq!(board, before);
        } else {
            prop_assert_eq!(result, Err(MoveError::InvalidCoordinate { row, col, size }));
            prop_assert_eq!(board.empty_count(), size * size);
        }
    }

    /// `is_full` holds exactly when no cell is empty.
    #[test]
    fn prop_is_full_iff_no_empty(board in board_strategy()) {
        prop_assert_eq!(board.is_full(), board.empty_count() == 0);
    }
}
