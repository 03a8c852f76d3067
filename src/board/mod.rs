//! Board model, conflict evaluation and neighbor generation.
//!
//! A board places exactly one queen per row and is stored as the column of
//! each row's queen. Boards are values: every move yields a new board and
//! never overwrites a row that another holder can observe.

mod conflicts;
mod neighbors;
mod types;

pub use conflicts::{conflicting_rows, conflicts, is_solution, queen_in_conflict};
pub use neighbors::{all_neighbors, random_neighbor, Move};
pub use types::Board;
