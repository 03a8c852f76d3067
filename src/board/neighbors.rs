//! Single-queen move neighborhoods.

use rand::Rng;

use super::types::Board;

/// A neighbor board together with the row whose queen moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub board: Board,
    pub row: usize,
}

/// Every board reachable by moving one queen within its row.
///
/// Yields `N * (N - 1)` moves in row-major, column-ascending order. Callers
/// that break ties by "first minimum wins" depend on this order.
pub fn all_neighbors(board: &Board) -> Vec<Move> {
    let n = board.len();
    let mut moves = Vec::with_capacity(n * n.saturating_sub(1));
    for row in 0..n {
        let current = board.column(row);
        for col in (0..n).filter(|&c| c != current) {
            moves.push(Move {
                board: board.with_move(row, col),
                row,
            });
        }
    }
    moves
}

/// A uniformly random single-queen move.
///
/// Picks a row, then resamples the column until it differs from the
/// current one. Resampling stops after `N` draws; the fallback draws from
/// the `N - 1` other columns directly, so the result stays uniform and the
/// loop always terminates.
///
/// # Panics
///
/// Panics if the board has fewer than two columns.
pub fn random_neighbor<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Move {
    let n = board.len();
    assert!(n >= 2, "a board of size {n} has no neighbors");

    let row = rng.random_range(0..n);
    let current = board.column(row);

    let mut col = current;
    for _ in 0..n {
        col = rng.random_range(0..n);
        if col != current {
            break;
        }
    }
    if col == current {
        let skip = rng.random_range(0..n - 1);
        col = if skip >= current { skip + 1 } else { skip };
    }

    Move {
        board: board.with_move(row, col),
        row,
    }
}
