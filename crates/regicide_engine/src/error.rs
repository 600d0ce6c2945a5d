//! Error types for the regicide engine
//!
//! Exactly two things can go wrong at the public boundary, and both leave
//! the game untouched and usable: naming a piece that was never created, and
//! requesting a destination outside the piece's current legal set. Malformed
//! destination input is not distinguished from a legal-but-blocked square;
//! both surface as [`EngineError::IllegalMove`].

use thiserror::Error;

/// Errors that can occur in the regicide engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Identity key not present in the roster
    #[error("unknown piece identity: {id}")]
    UnknownIdentity { id: String },

    /// Requested destination is not among the piece's legal destinations
    #[error("illegal move: {id} to {row}{file}")]
    IllegalMove { id: String, row: i8, file: char },
}

/// Result type alias for regicide engine operations
pub type EngineResult<T> = Result<T, EngineError>;
