//! Game lifecycle management
//!
//! Functions for creating and resetting games. All 32 pieces are created
//! here and never later; captures only detach pieces from the grid.

use std::collections::HashMap;

use crate::types::*;

/// Back rank layout by column: kind and sequence number.
const BACK_RANK: [(PieceKind, u8, i8); 8] = [
    (PieceKind::Rook, 1, 0),
    (PieceKind::Knight, 1, 1),
    (PieceKind::Bishop, 1, 2),
    (PieceKind::Queen, 1, 3),
    (PieceKind::King, 1, 4),
    (PieceKind::Bishop, 2, 5),
    (PieceKind::Knight, 2, 6),
    (PieceKind::Rook, 2, 7),
];

/// Create a new game with all 32 pieces on their starting ranks
///
/// `primary` picks which physical edge belongs to White: with a White
/// primary player, White's back rank is row 7 and its pawns head up the
/// board toward row 0; with a Black primary the layout mirrors. White moves
/// first either way.
pub fn new_game(primary: Color) -> Game {
    let mut game = Game {
        board: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        pieces: Vec::with_capacity(32),
        roster: HashMap::new(),
        current_player: Color::White,
        winner: None,
        move_counter: 0,
    };

    let white_primary = primary == Color::White;

    if white_primary {
        place_side(&mut game, Color::Black, 0, 1, Heading::Down);
        place_side(&mut game, Color::White, 7, 6, Heading::Up);
    } else {
        place_side(&mut game, Color::Black, 7, 6, Heading::Up);
        place_side(&mut game, Color::White, 0, 1, Heading::Down);
    }

    game
}

/// Reset to the starting position, keeping nothing from the old game
pub fn reset_game(game: &mut Game, primary: Color) {
    *game = new_game(primary);
}

fn place_side(game: &mut Game, color: Color, back_row: i8, pawn_row: i8, heading: Heading) {
    for &(kind, number, col) in &BACK_RANK {
        spawn(game, kind, color, number, Square::new(back_row, col), None);
    }
    for col in 0..BOARD_SIZE {
        spawn(
            game,
            PieceKind::Pawn,
            color,
            (col + 1) as u8,
            Square::new(pawn_row, col),
            Some(heading),
        );
    }
}

/// Create one piece, wiring all three views of it at once: the owning vec,
/// the grid cell, and the roster entry.
fn spawn(
    game: &mut Game,
    kind: PieceKind,
    color: Color,
    number: u8,
    square: Square,
    heading: Option<Heading>,
) {
    let piece = Piece {
        kind,
        color,
        number,
        square,
        alive: true,
        heading,
    };
    let id = piece.id();
    let idx = game.pieces.len();

    game.pieces.push(piece);
    game.board[square.row as usize][square.col as usize] = Some(idx);
    game.roster.insert(id, idx);
}
