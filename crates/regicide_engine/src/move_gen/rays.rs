//! Directional ray-casting
//!
//! Common functionality for every piece that reaches along a line. A ray
//! starts one step away from the piece's square and extends in a fixed
//! direction until the board edge or another piece stops it.
//!
//! ## Algorithm
//!
//! Per visited square:
//! 1. Empty: append it and keep stepping
//! 2. Same-color piece: stop without appending
//! 3. Opposite-color piece: append it (capture square) and stop
//!
//! This is the single blocking/capture rule in the engine. Rook, bishop and
//! queen consume whole rays; king and pawn consume only the first square of
//! each ray result.
//!
//! ## Ray grouping
//!
//! Vertical and horizontal rays come back as independent pairs. The diagonal
//! rays come back as two *combined* groups: the forward group concatenates
//! the (+row,+col) walk with the (+row,-col) walk, the backward group
//! concatenates (-row,+col) with (-row,-col). Callers that take only the
//! first square of a group therefore never see the trailing direction's
//! neighbor while the leading walk yields at least one square.

use crate::board::*;
use crate::types::*;

/// Step outward from `from` in a fixed direction, applying the
/// blocking/capture rule for a piece of the given color.
fn walk(game: &Game, from: Square, d_row: i8, d_col: i8, color: Color) -> Vec<Square> {
    let mut squares = Vec::new();
    let mut row = from.row + d_row;
    let mut col = from.col + d_col;

    while is_valid_square(row, col) {
        let sq = Square::new(row, col);
        match occupant_color(game, sq) {
            None => squares.push(sq),
            Some(occupant) if occupant == color => break,
            Some(_) => {
                squares.push(sq);
                break;
            }
        }
        row += d_row;
        col += d_col;
    }

    squares
}

/// Vertical rays at fixed column: (forward = +row, backward = -row)
pub fn vertical_rays(game: &Game, from: Square, color: Color) -> (Vec<Square>, Vec<Square>) {
    (
        walk(game, from, 1, 0, color),
        walk(game, from, -1, 0, color),
    )
}

/// Horizontal rays at fixed row: (right = +col, left = -col)
pub fn horizontal_rays(game: &Game, from: Square, color: Color) -> (Vec<Square>, Vec<Square>) {
    (
        walk(game, from, 0, 1, color),
        walk(game, from, 0, -1, color),
    )
}

/// Diagonal ray groups: (forward = +row pair, backward = -row pair)
///
/// Group order is load-bearing for king and pawn: the +col walk comes first
/// in each group.
pub fn diagonal_rays(game: &Game, from: Square, color: Color) -> (Vec<Square>, Vec<Square>) {
    let mut forward = walk(game, from, 1, 1, color);
    forward.extend(walk(game, from, 1, -1, color));

    let mut backward = walk(game, from, -1, 1, color);
    backward.extend(walk(game, from, -1, -1, color));

    (forward, backward)
}
