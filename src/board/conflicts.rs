//! Conflict evaluation.

use super::types::Board;

/// Whether queens at `(r1, c1)` and `(r2, c2)` attack each other.
///
/// Rows are assumed distinct, so a pair shares a column or a diagonal but
/// never both.
#[inline]
fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    c1 == c2 || c1.abs_diff(c2) == r1.abs_diff(r2)
}

/// Number of unordered row pairs whose queens attack each other.
///
/// Zero iff the board is a valid N-Queens solution. O(N²).
///
/// # Examples
///
/// ```
/// use u_queens::board::{conflicts, Board};
///
/// let solved = Board::from_columns(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(conflicts(&solved), 0);
///
/// let stacked = Board::from_columns(vec![0, 0, 0, 0]).unwrap();
/// assert_eq!(conflicts(&stacked), 6);
/// ```
pub fn conflicts(board: &Board) -> usize {
    let cols = board.columns();
    let mut count = 0;
    for i in 0..cols.len() {
        for j in (i + 1)..cols.len() {
            if attacks(i, cols[i], j, cols[j]) {
                count += 1;
            }
        }
    }
    count
}

pub fn is_solution(board: &Board) -> bool {
    conflicts(board) == 0
}

/// Whether the queen in `row` is attacked by any other queen.
pub fn queen_in_conflict(board: &Board, row: usize) -> bool {
    let cols = board.columns();
    (0..cols.len()).any(|other| other != row && attacks(row, cols[row], other, cols[other]))
}

/// Rows whose queen is attacked by at least one other queen, ascending.
pub fn conflicting_rows(board: &Board) -> Vec<usize> {
    (0..board.len())
        .filter(|&row| queen_in_conflict(board, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(cols: &[usize]) -> Board {
        Board::from_columns(cols.to_vec()).unwrap()
    }

    #[test]
    fn test_known_solutions() {
        assert_eq!(conflicts(&board(&[1, 3, 0, 2])), 0);
        assert_eq!(conflicts(&board(&[0, 4, 7, 5, 2, 6, 1, 3])), 0);
        assert!(is_solution(&board(&[2, 0, 3, 1])));
    }

    #[test]
    fn test_known_costs() {
        assert_eq!(conflicts(&board(&[0, 0, 0, 0])), 6);
        assert_eq!(conflicts(&board(&[0, 1, 2, 3])), 6);
        assert_eq!(conflicts(&board(&[0, 4, 7, 5, 2, 6, 1, 1])), 2);
        assert_eq!(conflicts(&board(&[0; 8])), 28);
    }

    #[test]
    fn test_conflicting_rows() {
        // Row 7 shares column 1 with row 6 and a diagonal with row 3.
        let b = board(&[0, 4, 7, 5, 2, 6, 1, 1]);
        assert_eq!(conflicting_rows(&b), vec![3, 6, 7]);
        assert!(!queen_in_conflict(&b, 0));
        assert!(conflicting_rows(&board(&[1, 3, 0, 2])).is_empty());
    }

    fn arb_board() -> impl Strategy<Value = Vec<usize>> {
        (2usize..10).prop_flat_map(|n| proptest::collection::vec(0..n, n))
    }

    fn brute_force_valid(cols: &[usize]) -> bool {
        for i in 0..cols.len() {
            for j in 0..cols.len() {
                if i != j
                    && (cols[i] == cols[j]
                        || (cols[i] as i64 - cols[j] as i64).abs() == (i as i64 - j as i64).abs())
                {
                    return false;
                }
            }
        }
        true
    }

    proptest! {
        #[test]
        fn prop_zero_iff_no_attacks(cols in arb_board()) {
            let b = board(&cols);
            prop_assert_eq!(conflicts(&b) == 0, brute_force_valid(&cols));
        }

        #[test]
        fn prop_bounded_by_pair_count(cols in arb_board()) {
            let n = cols.len();
            prop_assert!(conflicts(&board(&cols)) <= n * (n - 1) / 2);
        }

        #[test]
        fn prop_invariant_under_reflection(cols in arb_board()) {
            // Reversing rows, and mirroring columns, relabel the board consistently.
            let n = cols.len();
            let original = conflicts(&board(&cols));
            let reversed: Vec<usize> = cols.iter().rev().copied().collect();
            let mirrored: Vec<usize> = cols.iter().map(|&c| n - 1 - c).collect();
            prop_assert_eq!(conflicts(&board(&reversed)), original);
            prop_assert_eq!(conflicts(&board(&mirrored)), original);
        }

        #[test]
        fn prop_conflicting_rows_empty_iff_solved(cols in arb_board()) {
            let b = board(&cols);
            prop_assert_eq!(conflicting_rows(&b).is_empty(), is_solution(&b));
        }
    }
}
