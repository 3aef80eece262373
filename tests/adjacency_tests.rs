//! Adjacency penalty rule tests.
//!
//! Lines of length 1-5 are laid along every axis and the rule is applied
//! at both ends and in the middle. Removal counts must depend only on the
//! run length, never on axis, end, or selection source.

use five_in_a_row::{
    removal_count, Axis, Board, Cell, GameRng, Position, ScriptedSelection, SelectionSource,
    Symbol,
};
use proptest::prelude::*;

const SIZE: usize = 9;

/// Lay `len` stones of `symbol` from `start` along `axis`.
fn lay_line(board: &mut Board, start: Position, axis: Axis, len: usize, symbol: Symbol) -> Vec<Position> {
    let (d_row, d_col) = axis.delta();
    (0..len)
        .map(|k| {
            let pos = start.offset(d_row, d_col, k, board.size()).unwrap();
            board.place_sign(pos.row, pos.col, symbol).unwrap();
            pos
        })
        .collect()
}

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

/// Applying the rule at the far end of a lone line of three removes one.
#[test]
fn test_line_of_three_removes_one() {
    for axis in Axis::ALL {
        let mut board = Board::new(SIZE).unwrap();
        let line = lay_line(&mut board, Position::new(2, 4), axis, 3, Symbol::X);

        let removal = board.handle_adjacent_count(line[2], Symbol::X, &mut GameRng::new(1));

        assert_eq!(removal.metric, 3, "axis {:?}", axis);
        assert_eq!(removal.removed.len(), 1);
        assert_eq!(board.count(Symbol::X), 2);
        assert!(line.contains(&removal.removed[0]));
    }
}

/// A line of four costs two distinct stones.
#[test]
fn test_line_of_four_removes_two() {
    for axis in Axis::ALL {
        let mut board = Board::new(SIZE).unwrap();
        let line = lay_line(&mut board, Position::new(1, 4), axis, 4, Symbol::O);

        let removal = board.handle_adjacent_count(line[0], Symbol::O, &mut GameRng::new(2));

        assert_eq!(removal.metric, 4);
        assert_eq!(removal.removed.len(), 2);
        assert_ne!(removal.removed[0], removal.removed[1]);
        assert_eq!(board.count(Symbol::O), 2);
    }
}

/// Stones elsewhere on the board are candidates for removal too.
#[test]
fn test_removal_draws_from_whole_board() {
    let mut board = Board::new(SIZE).unwrap();
    board.place_sign(8, 8, Symbol::X).unwrap();
    let line = lay_line(&mut board, Position::new(0, 0), Axis::Horizontal, 3, Symbol::X);

    // candidates row-major: (0,0) (0,1) (0,2) (8,8)
    let mut source = ScriptedSelection::new(vec![3]);
    let removal = board.handle_adjacent_count(line[2], Symbol::X, &mut source);

    assert_eq!(removal.removed.as_slice(), &[Position::new(8, 8)]);
    assert_eq!(board.symbol_at(8, 8), Ok(Cell::Empty));
    assert!(line.iter().all(|p| board.get(*p) == Some(Cell::Occupied(Symbol::X))));
}

/// The rule measures runs only through the placed cell.
#[test]
fn test_runs_elsewhere_ignored() {
    let mut board = Board::new(SIZE).unwrap();
    lay_line(&mut board, Position::new(0, 0), Axis::Horizontal, 4, Symbol::X);
    board.place_sign(6, 6, Symbol::X).unwrap();

    let removal = board.handle_adjacent_count(Position::new(6, 6), Symbol::X, &mut GameRng::new(3));

    assert_eq!(removal.metric, 1);
    assert!(removal.is_empty());
    assert_eq!(board.count(Symbol::X), 5);
}

/// Any `SelectionSource` implementation can drive the rule.
#[test]
fn test_custom_selection_source() {
    struct Greedy;

    impl SelectionSource for Greedy {
        fn pick(&mut self, candidates: &[Position], count: usize) -> five_in_a_row::Picks {
            candidates.iter().copied().take(count).collect()
        }
    }

    let mut board = Board::new(SIZE).unwrap();
    let line = lay_line(&mut board, Position::new(4, 0), Axis::Horizontal, 4, Symbol::O);
    let removal = board.handle_adjacent_count(line[3], Symbol::O, &mut Greedy);

    assert_eq!(removal.removed.as_slice(), &line[..2]);
    assert_eq!(board.count(Symbol::O), 2);
}

proptest! {
    /// Removal depends only on run length, whichever cell of the line is
    /// measured and whichever axis the line lies on.
    #[test]
    fn prop_removal_is_direction_symmetric(
        axis in axis_strategy(),
        len in 1usize..=5,
        start_row in 0usize..5,
        pick_end in 0usize..5,
        seed in any::<u64>(),
    ) {
        let mut board = Board::new(SIZE).unwrap();
        let line = lay_line(&mut board, Position::new(start_row, 4), axis, len, Symbol::X);
        let at = line[pick_end % len];

        let removal = board.handle_adjacent_count(at, Symbol::X, &mut GameRng::new(seed));

        prop_assert_eq!(removal.metric, len);
        prop_assert_eq!(removal.removed.len(), removal_count(len));
        prop_assert_eq!(board.count(Symbol::X), len - removal_count(len));
        for pos in &removal.removed {
            prop_assert!(line.contains(pos));
            prop_assert_eq!(board.get(*pos), Some(Cell::Empty));
        }
    }

    /// Seeded RNGs reproduce the same removals.
    #[test]
    fn prop_seeded_removal_is_deterministic(seed in any::<u64>(), len in 3usize..=4) {
        let run = |seed: u64| {
            let mut board = Board::new(SIZE).unwrap();
            board.place_sign(8, 0, Symbol::O).unwrap();
            board.place_sign(7, 7, Symbol::O).unwrap();
            let line = lay_line(&mut board, Position::new(0, 4), Axis::Vertical, len, Symbol::O);
            let removal = board.handle_adjacent_count(line[len - 1], Symbol::O, &mut GameRng::new(seed));
            (removal, board)
        };

        let (first_removal, first_board) = run(seed);
        let (second_removal, second_board) = run(seed);
        prop_assert_eq!(first_removal, second_removal);
        prop_assert_eq!(first_board, second_board);
    }
}
