//! Bishop move generation
//!
//! Bishops slide diagonally until blocked by another piece or the board
//! edge.

use super::rays;
use crate::types::*;

/// Generate bishop moves from a given square
///
/// Consumes both diagonal ray groups at full sliding distance.
pub fn generate_bishop_moves(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    let (forward, backward) = rays::diagonal_rays(game, from, color);

    moves.extend(forward);
    moves.extend(backward);
}
