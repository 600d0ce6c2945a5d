//! Knight move generation
//!
//! Knights jump in an L-shape: two squares in one direction, one square
//! perpendicular. They are the only piece unaffected by blockers along the
//! way, so each of the eight fixed offsets is checked in isolation.

use crate::board::*;
use crate::types::*;

/// The eight L-offsets as (column delta, row delta) pairs.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Generate knight moves from a given square
///
/// An offset square is a candidate iff it is on the board and not occupied
/// by a same-color piece. Captures are allowed.
pub fn generate_knight_moves(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    for &(d_col, d_row) in &KNIGHT_OFFSETS {
        let row = from.row + d_row;
        let col = from.col + d_col;

        if !is_valid_square(row, col) {
            continue;
        }

        let sq = Square::new(row, col);
        if occupant_color(game, sq) != Some(color) {
            moves.push(sq);
        }
    }
}
