//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.

use super::bishop;
use super::rook;
use crate::types::*;

/// Generate queen moves from a given square
///
/// Queen moves are exactly the union of rook and bishop moves, so this
/// function delegates to both generators.
pub fn generate_queen_moves(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    bishop::generate_bishop_moves(game, from, color, moves);
    rook::generate_rook_moves(game, from, color, moves);
}
