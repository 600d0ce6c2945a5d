//! Text board renderer
//!
//! Draws the grid the way players address it: identity keys in occupied
//! cells, `___` for empty ones, file letters across the top and row digits
//! down the side.

use regicide_engine::board::piece_at;
use regicide_engine::types::{Game, Square, BOARD_SIZE};

/// Move the cursor home and clear the screen (ANSI)
pub fn clear_screen() {
    print!("\x1b[H\x1b[J");
}

/// Render the board as text
pub fn render(game: &Game) -> String {
    let mut out = String::new();
    out.push_str("       _a_ _b_ _c_ _d_ _e_ _f_ _g_ _h_ \n");

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{row} --> "));
        for col in 0..BOARD_SIZE {
            match piece_at(game, Square::new(row, col)) {
                Some(piece) => out.push_str(&format!("{} ", piece.id())),
                None => out.push_str("___ "),
            }
        }
        out.push('\n');
    }

    out
}
