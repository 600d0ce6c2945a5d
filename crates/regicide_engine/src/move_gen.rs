//! Move generation
//!
//! One generator per piece variant, dispatched by a single exhaustive match
//! over [`PieceKind`]. Every generator appends flat, in-bounds destination
//! squares; duplicates are impossible by construction. None of them asks
//! whether the resulting position would expose the mover's own king: the
//! game ends on actual king capture, so there is no check concept to
//! consult.

pub mod rays;

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use crate::types::*;

/// Generate all destination squares for the piece at `idx` in
/// [`Game::pieces`].
///
/// A captured piece generates nothing: its grid cell is gone, and offering
/// moves from its last square would let it climb back onto the board.
pub fn generate_moves(game: &Game, idx: usize) -> Vec<Square> {
    let piece = &game.pieces[idx];
    let mut moves = Vec::new();

    if !piece.alive {
        return moves;
    }

    let from = piece.square;
    let color = piece.color;

    match piece.kind {
        PieceKind::Rook => rook::generate_rook_moves(game, from, color, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(game, from, color, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(game, from, color, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(game, from, color, &mut moves),
        PieceKind::King => king::generate_king_moves(game, from, color, &mut moves),
        PieceKind::Pawn => {
            // Every pawn gets a heading at setup; a heading-less pawn is
            // unrepresentable through the public constructors.
            if let Some(heading) = piece.heading {
                pawn::generate_pawn_moves(game, from, color, heading, &mut moves);
            }
        }
    }

    moves
}
