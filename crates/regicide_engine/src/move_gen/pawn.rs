//! Pawn move generation
//!
//! Pawns are the only directional piece: the heading assigned at setup
//! selects which vertical ray and which diagonal group they consume.
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the heading, only onto an empty
//!   square. No two-square opening move.
//! - **Diagonal capture**: the first square of the heading-side diagonal
//!   group, only when that square is occupied. A ray never contains a
//!   same-color square, so an occupied candidate is always an enemy.
//! - No en passant, no promotion.
//!
//! The diagonal group shares the king's combined-group behavior: while the
//! +col walk yields a square, the -col neighbor is never offered.

use super::rays;
use crate::board::*;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// Produces at most one forward candidate and at most one diagonal capture
/// candidate.
pub fn generate_pawn_moves(
    game: &Game,
    from: Square,
    color: Color,
    heading: Heading,
    moves: &mut Vec<Square>,
) {
    let (v_forward, v_backward) = rays::vertical_rays(game, from, color);
    let (d_forward, d_backward) = rays::diagonal_rays(game, from, color);

    let (step, diagonal) = match heading {
        Heading::Down => (v_forward, d_forward),
        Heading::Up => (v_backward, d_backward),
    };

    // The first ray square may be an enemy capture square; a straight push
    // still requires it empty.
    if let Some(&sq) = step.first() {
        if is_empty(game, sq) {
            moves.push(sq);
        }
    }

    if let Some(&sq) = diagonal.first() {
        if !is_empty(game, sq) {
            moves.push(sq);
        }
    }
}
