//! Turn and outcome queries

use crate::types::*;

/// Side to move next
pub fn current_player(game: &Game) -> Color {
    game.current_player
}

/// True once a king has been captured. The engine never blocks further
/// calls on a finished game; stopping is the caller's job.
pub fn is_game_over(game: &Game) -> bool {
    game.winner.is_some()
}

/// The side that captured the enemy king, once that has happened
pub fn winner(game: &Game) -> Option<Color> {
    game.winner
}
