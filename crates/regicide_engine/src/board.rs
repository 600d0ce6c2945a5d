//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square validation
//! - Column index / file letter mapping at the notation boundary
//! - Occupancy queries

use super::types::*;

/// Check if square coordinates are valid
#[inline]
pub fn is_valid_square(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Check if a square is on the board
#[inline]
pub fn in_bounds(sq: Square) -> bool {
    is_valid_square(sq.row, sq.col)
}

/// Convert a column index to its file letter (0 = 'a', 7 = 'h')
#[inline]
pub fn col_to_file(col: i8) -> char {
    (b'a' + col as u8) as char
}

/// Convert a file letter back to its column index. `None` outside 'a'-'h'.
#[inline]
pub fn file_to_col(file: char) -> Option<i8> {
    match file {
        'a'..='h' => Some(file as i8 - 'a' as i8),
        _ => None,
    }
}

/// Re-express a square in boundary notation: row digit plus file letter.
#[inline]
pub fn to_notation(sq: Square) -> (i8, char) {
    (sq.row, col_to_file(sq.col))
}

/// Get the piece occupying a square, if any
pub fn piece_at(game: &Game, sq: Square) -> Option<&Piece> {
    game.board[sq.row as usize][sq.col as usize].map(|idx| &game.pieces[idx])
}

/// Check if a square is empty
#[inline]
pub fn is_empty(game: &Game, sq: Square) -> bool {
    game.board[sq.row as usize][sq.col as usize].is_none()
}

/// Color of the piece on a square, `None` when the square is empty
pub fn occupant_color(game: &Game, sq: Square) -> Option<Color> {
    piece_at(game, sq).map(|piece| piece.color)
}
