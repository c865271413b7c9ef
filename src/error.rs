//! Error types for engine operations.

use thiserror::Error;

/// Errors raised by the dealing shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left to deal.
    #[error("no cards left in the shoe")]
    Empty,
}
