//! Core types for the regicide engine
//!
//! ## The `Game` Structure - Central Engine State
//!
//! The `Game` struct owns everything a single session needs:
//! 1. **Piece store** (`pieces: Vec<Piece>`) - the one owning collection;
//!    every piece ever created for this game lives here, captured or not
//! 2. **Grid** (`board: Grid`) - an 8x8 array of optional indices into the
//!    piece store
//! 3. **Roster** (`roster: HashMap<String, usize>`) - identity key to piece
//!    index, built once at setup
//! 4. **Turn state** (`current_player`) - flips exactly once per applied move
//! 5. **Outcome** (`winner`) - set the instant a king is captured
//!
//! ### Why indices instead of shared pieces?
//!
//! The grid and the roster both need to name the same piece. Storing indices
//! into `pieces` keeps a single mutation site: moving a piece rewrites two
//! grid cells and one `square` field, and every view agrees afterwards. A
//! captured piece simply loses its grid cell; the roster entry and the
//! `Piece` value stay, so the end-of-game report can still name it.

use std::collections::HashMap;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// The two sides. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing side.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// One-letter form used in identity keys: `'W'` or `'B'`.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

/// Closed set of piece variants. Move generation matches exhaustively over
/// this tag, so adding a variant fails to compile until every site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// One-letter form used in identity keys.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Pawn forward direction, fixed at setup. `Down` advances toward higher row
/// indices, `Up` toward lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
}

/// A board coordinate. Row and column are both in `0..8` whenever the square
/// names a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }
}

/// One chess piece.
///
/// The identity key ([`Piece::id`]) never changes, even after capture. A
/// captured piece keeps its last square; only the `alive` flag records that
/// the grid no longer references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// 1-based sequence number within this color+kind group (pawns 1-8,
    /// rooks/knights/bishops 1-2, queen and king always 1).
    pub number: u8,
    pub square: Square,
    pub alive: bool,
    /// Forward direction; `Some` for pawns, `None` for everything else.
    pub heading: Option<Heading>,
}

impl Piece {
    /// Identity key, e.g. `"Wp3"`. Unique among all pieces ever created for
    /// a game and immutable for the piece's lifetime.
    pub fn id(&self) -> String {
        format!("{}{}{}", self.color.letter(), self.kind.letter(), self.number)
    }
}

/// Grid cells hold indices into [`Game::pieces`] rather than owned pieces.
pub type Grid = [[Option<usize>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Central game state. Construct with [`crate::api::new_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Grid,
    pub pieces: Vec<Piece>,
    /// Identity key -> index into `pieces`. Built once at setup; entries are
    /// never removed, so captured pieces stay queryable by identity.
    pub roster: HashMap<String, usize>,
    pub current_player: Color,
    /// `Some` from the moment a king is captured. The engine keeps accepting
    /// calls after that; stopping is the caller's decision.
    pub winner: Option<Color>,
    pub move_counter: i32,
}
