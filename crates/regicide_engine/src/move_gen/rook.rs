//! Rook move generation
//!
//! Rooks slide horizontally and vertically until blocked by another piece or
//! the board edge.

use super::rays;
use crate::types::*;

/// Generate rook moves from a given square
///
/// Consumes all four vertical and horizontal rays at full sliding distance.
pub fn generate_rook_moves(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    let (forward, backward) = rays::vertical_rays(game, from, color);
    let (right, left) = rays::horizontal_rays(game, from, color);

    moves.extend(forward);
    moves.extend(right);
    moves.extend(left);
    moves.extend(backward);
}
