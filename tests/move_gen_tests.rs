//! Move Generation Integration Tests
//!
//! Tests for per-variant candidate generation:
//! - Ray blocking and capture squares for sliding pieces
//! - Knight offsets
//! - Pawn pushes and diagonal captures
//! - The king's one-step, six-candidate reach

use std::collections::HashSet;

use regicide_engine::api::{legal_destinations, new_game};
use regicide_engine::move_gen::generate_moves;
use regicide_engine::types::{Color, Game, Square};

/// Relocate a piece directly, keeping the grid and its stored position in
/// sync, without going through move validation.
fn teleport(game: &mut Game, id: &str, to: Square) {
    let idx = game.roster[id];
    let from = game.pieces[idx].square;
    game.board[from.row as usize][from.col as usize] = None;
    game.pieces[idx].square = to;
    game.board[to.row as usize][to.col as usize] = Some(idx);
}

/// Take a piece off the board entirely, as if it had been captured.
fn lift(game: &mut Game, id: &str) {
    let idx = game.roster[id];
    let from = game.pieces[idx].square;
    game.board[from.row as usize][from.col as usize] = None;
    game.pieces[idx].alive = false;
}

fn candidates(game: &Game, id: &str) -> HashSet<Square> {
    generate_moves(game, game.roster[id]).into_iter().collect()
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_rook_rays_stop_before_own_piece_and_on_enemy() {
    let mut game = new_game(Color::White);
    teleport(&mut game, "Wr1", Square::new(4, 3));

    let moves = candidates(&game, "Wr1");

    // Up the board: two empty squares, then the enemy pawn's square, nothing beyond.
    assert!(moves.contains(&Square::new(3, 3)));
    assert!(moves.contains(&Square::new(2, 3)));
    assert!(moves.contains(&Square::new(1, 3)));
    assert!(!moves.contains(&Square::new(0, 3)));

    // Down the board: one empty square, then our own pawn blocks.
    assert!(moves.contains(&Square::new(5, 3)));
    assert!(!moves.contains(&Square::new(6, 3)));

    // Row 4 is otherwise empty, so both horizontal rays run to the edge.
    for col in [0, 1, 2, 4, 5, 6, 7] {
        assert!(moves.contains(&Square::new(4, col)));
    }

    assert_eq!(moves.len(), 11);
}

#[test]
fn test_rook_ray_extends_when_blocker_leaves() {
    let mut game = new_game(Color::White);
    teleport(&mut game, "Wr1", Square::new(4, 3));
    lift(&mut game, "Wp4");

    let moves = candidates(&game, "Wr1");

    // The downward ray now reaches the vacated square but still stops
    // before the queen on the back rank.
    assert!(moves.contains(&Square::new(6, 3)));
    assert!(!moves.contains(&Square::new(7, 3)));
    assert_eq!(moves.len(), 12);
}

#[test]
fn test_queen_is_union_of_rook_and_bishop() {
    let center = Square::new(4, 3);

    let mut queen_game = new_game(Color::White);
    teleport(&mut queen_game, "Wq1", center);
    let queen_moves = candidates(&queen_game, "Wq1");

    let mut rook_game = new_game(Color::White);
    teleport(&mut rook_game, "Wr1", center);
    let rook_moves = candidates(&rook_game, "Wr1");

    let mut bishop_game = new_game(Color::White);
    teleport(&mut bishop_game, "Wb1", center);
    let bishop_moves = candidates(&bishop_game, "Wb1");

    let union: HashSet<Square> = rook_moves.union(&bishop_moves).copied().collect();
    assert_eq!(queen_moves, union);
}

#[test]
fn test_bishop_diagonal_capture_square_ends_ray() {
    let mut game = new_game(Color::White);
    teleport(&mut game, "Wb1", Square::new(4, 3));

    let moves = candidates(&game, "Wb1");

    // Up-right runs to the black pawn at (1,6) and no further.
    assert!(moves.contains(&Square::new(3, 4)));
    assert!(moves.contains(&Square::new(2, 5)));
    assert!(moves.contains(&Square::new(1, 6)));
    assert!(!moves.contains(&Square::new(0, 7)));

    // Down-left stops before our own pawn at (6,1).
    assert!(moves.contains(&Square::new(5, 2)));
    assert!(!moves.contains(&Square::new(6, 1)));
}

// ============================================================================
// Knight Tests
// ============================================================================

#[test]
fn test_knight_initial_destinations() {
    let game = new_game(Color::White);

    let moves: HashSet<(i8, char)> = legal_destinations(&game, "Wn1")
        .expect("Wn1 is in the roster")
        .into_iter()
        .collect();

    assert_eq!(moves, HashSet::from([(5, 'a'), (5, 'c')]));
}

#[test]
fn test_knight_candidates_are_l_offsets_filtered_by_own_pieces() {
    let mut game = new_game(Color::White);
    let from = Square::new(4, 4);
    teleport(&mut game, "Wn1", from);

    let moves = candidates(&game, "Wn1");

    assert!(moves.len() <= 8);
    for sq in &moves {
        let d_row = (sq.row - from.row).abs();
        let d_col = (sq.col - from.col).abs();
        assert!(
            (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1),
            "{sq:?} is not an L-offset from {from:?}"
        );
    }

    // The two landing squares held by our own pawns are filtered out.
    assert!(!moves.contains(&Square::new(6, 3)));
    assert!(!moves.contains(&Square::new(6, 5)));
    assert_eq!(moves.len(), 6);
}

// ============================================================================
// Pawn Tests
// ============================================================================

#[test]
fn test_pawn_single_forward_push_only() {
    let game = new_game(Color::White);

    let moves = legal_destinations(&game, "Wp4").expect("Wp4 is in the roster");
    assert_eq!(moves, vec![(5, 'd')]);
}

#[test]
fn test_pawn_diagonal_requires_occupied_square() {
    let mut game = new_game(Color::White);

    // Empty diagonal: push only.
    assert_eq!(candidates(&game, "Wp4"), HashSet::from([Square::new(5, 3)]));

    // An enemy on the leading diagonal becomes a capture candidate.
    teleport(&mut game, "Bp1", Square::new(5, 4));
    assert_eq!(
        candidates(&game, "Wp4"),
        HashSet::from([Square::new(5, 3), Square::new(5, 4)])
    );
}

#[test]
fn test_pawn_trailing_diagonal_shadowed_by_leading_walk() {
    let mut game = new_game(Color::White);

    // An enemy sits up-left of Wp4, but the up-right walk yields squares, so
    // the combined group's first entry is the empty (5,4) and no capture is
    // offered.
    teleport(&mut game, "Bp1", Square::new(5, 2));

    assert_eq!(candidates(&game, "Wp4"), HashSet::from([Square::new(5, 3)]));
}

#[test]
fn test_pawn_blocked_straight_ahead_cannot_capture_forward() {
    let mut game = new_game(Color::White);
    teleport(&mut game, "Bp1", Square::new(5, 3));

    assert!(candidates(&game, "Wp4").is_empty());
}

#[test]
fn test_pawn_heading_follows_setup_layout() {
    // Primary White: black pawns advance toward higher rows.
    let game = new_game(Color::White);
    assert_eq!(
        legal_destinations(&game, "Bp4").expect("Bp4 is in the roster"),
        vec![(2, 'd')]
    );

    // Primary Black mirrors the board: white pawns now advance downward.
    let mirrored = new_game(Color::Black);
    assert_eq!(
        legal_destinations(&mirrored, "Wp1").expect("Wp1 is in the roster"),
        vec![(2, 'a')]
    );
}

// ============================================================================
// King Tests
// ============================================================================

#[test]
fn test_king_offers_six_candidates_in_the_open() {
    let mut game = new_game(Color::White);
    teleport(&mut game, "Wk1", Square::new(4, 4));

    let moves = candidates(&game, "Wk1");

    // One step each way vertically and horizontally, plus one square per
    // diagonal group. The +col walk leads each group, so (5,3) and (3,3)
    // are unreachable even though they are empty diagonal neighbors.
    assert_eq!(
        moves,
        HashSet::from([
            Square::new(5, 4),
            Square::new(3, 4),
            Square::new(4, 5),
            Square::new(4, 3),
            Square::new(5, 5),
            Square::new(3, 5),
        ])
    );
}

#[test]
fn test_king_trailing_diagonal_appears_when_leading_walk_is_empty() {
    let mut game = new_game(Color::White);
    teleport(&mut game, "Wk1", Square::new(4, 4));

    // Our own pawn on (5,5) empties the leading down-right walk, so the
    // group's first square becomes the down-left neighbor.
    teleport(&mut game, "Wp1", Square::new(5, 5));

    let moves = candidates(&game, "Wk1");
    assert!(moves.contains(&Square::new(5, 3)));
    assert!(!moves.contains(&Square::new(5, 5)));
}
