//! Destination queries and move execution
//!
//! The engine boundary speaks notation form: a destination is a row digit
//! 0-7 paired with a file letter 'a'-'h' (column 0 = 'a').

use crate::board::{file_to_col, to_notation};
use crate::error::{EngineError, EngineResult};
use crate::move_gen::generate_moves;
use crate::types::*;

/// All squares the identified piece may move to right now, in notation form
///
/// # Errors
///
/// [`EngineError::UnknownIdentity`] when `id` names no piece in the roster.
/// A captured piece is still a known identity; it just has no destinations.
pub fn legal_destinations(game: &Game, id: &str) -> EngineResult<Vec<(i8, char)>> {
    let idx = lookup(game, id)?;

    Ok(generate_moves(game, idx)
        .into_iter()
        .map(to_notation)
        .collect())
}

/// Execute a move for the identified piece
///
/// The destination must be one of the piece's current legal destinations;
/// anything else (including notation that names no square at all) is
/// rejected with [`EngineError::IllegalMove`], leaving the game untouched
/// and the turn unflipped.
///
/// On success: any piece on the destination cell is detached from the grid
/// and returned as the capture, the acting piece's stored position and both
/// grid cells are updated together, and the turn flips. Capturing a king
/// records the mover as winner; that captured king is the sole end-of-game
/// signal.
///
/// # Errors
///
/// [`EngineError::UnknownIdentity`] when `id` names no piece in the roster,
/// [`EngineError::IllegalMove`] when the destination is not currently legal.
pub fn apply_move(game: &mut Game, id: &str, dest: (i8, char)) -> EngineResult<Option<Piece>> {
    let idx = lookup(game, id)?;

    let (row, file) = dest;
    let illegal = || EngineError::IllegalMove {
        id: id.to_string(),
        row,
        file,
    };

    let col = file_to_col(file).ok_or_else(illegal)?;
    let target = Square::new(row, col);
    if !generate_moves(game, idx).contains(&target) {
        return Err(illegal());
    }

    let captured_idx = game.board[target.row as usize][target.col as usize];
    if let Some(ci) = captured_idx {
        game.pieces[ci].alive = false;
    }

    let from = game.pieces[idx].square;
    game.board[from.row as usize][from.col as usize] = None;
    game.pieces[idx].square = target;
    game.board[target.row as usize][target.col as usize] = Some(idx);

    let mover = game.pieces[idx].color;
    game.move_counter += 1;
    game.current_player = game.current_player.opponent();

    let captured = captured_idx.map(|ci| game.pieces[ci].clone());
    if let Some(piece) = &captured {
        if piece.kind == PieceKind::King {
            game.winner = Some(mover);
        }
    }

    Ok(captured)
}

fn lookup(game: &Game, id: &str) -> EngineResult<usize> {
    game.roster
        .get(id)
        .copied()
        .ok_or_else(|| EngineError::UnknownIdentity { id: id.to_string() })
}
