//! King move generation
//!
//! Kings take exactly one step: the first square of each ray result, never
//! the full slide. That yields at most six candidates, not eight. The two
//! diagonal results are combined groups (see [`super::rays`]), so within
//! each group only the leading direction's neighbor is reachable while that
//! walk yields a square. The trailing diagonal neighbor becomes reachable
//! only when the leading walk comes back empty.

use super::rays;
use crate::types::*;

/// Generate king moves from a given square
///
/// One candidate per ray result: forward, backward, right, left, and the
/// head of each diagonal group.
pub fn generate_king_moves(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    let (forward, backward) = rays::vertical_rays(game, from, color);
    let (right, left) = rays::horizontal_rays(game, from, color);
    let (diag_forward, diag_backward) = rays::diagonal_rays(game, from, color);

    for ray in [forward, backward, right, left, diag_forward, diag_backward] {
        if let Some(&sq) = ray.first() {
            moves.push(sq);
        }
    }
}
