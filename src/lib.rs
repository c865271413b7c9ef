//! A single-player blackjack round engine.
//!
//! The crate provides a [`Session`] type that manages the full round flow:
//! wagering against a shared bankroll, the player's hit/stand turn, the
//! dealer's fixed draw policy, payout, and the standoff carry-over between
//! rounds. A tied round leaves the pool on the table; the next non-tied
//! round settles it.
//!
//! All input reaches the engine through the [`DecisionInput`] trait as
//! already-validated values, and renderings go out through [`GameDisplay`].
//! The pure validators in [`decision`] are what an interactive shell loops
//! on; see `demos/cli_blackjack.rs` for a complete one.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Session, TableOptions};
//!
//! let options = TableOptions::default();
//! let session = Session::new(options, 100, 42);
//! let _ = session;
//! ```

pub mod card;
pub mod decision;
pub mod error;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use decision::{
    DecisionInput, DecisionKind, GameDisplay, PlayerAction, Retry, parse_action, parse_play_again,
    validate_wager,
};
pub use error::ShoeError;
pub use hand::{Hand, HandView, evaluate, is_soft};
pub use ledger::Ledger;
pub use options::{PayoutRatio, TableOptions};
pub use result::{RoundOutcome, RoundSummary, SessionEnd, SessionSummary};
pub use round::{Session, TurnState};
pub use shoe::Shoe;
