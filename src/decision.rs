//! The decision contract between the engine and its I/O shell.
//!
//! The engine only ever consumes validated values. Raw input is checked by
//! the pure validators here, one per [`DecisionKind`]; on [`Retry`] the shell
//! reports the reason, re-prompts, and tries again. Nothing recoverable
//! crosses into the engine.

use thiserror::Error;

use crate::hand::HandView;
use crate::ledger::Ledger;
use crate::result::RoundSummary;

/// A player's move during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw one more card.
    Hit,
    /// Keep the current hand; the turn ends.
    Stand,
}

/// The kinds of decision the engine requests from its shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// A wager for the round about to be played.
    Wager,
    /// The next hit/stand move.
    NextAction,
    /// Whether to play another round.
    NextRound,
}

impl DecisionKind {
    /// Prompt wording for interactive shells.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Wager => "What's your wager?",
            Self::NextAction => "What's your next move? S for Stand, H for Hit.",
            Self::NextRound => "Would you like to play one more round? Y or N.",
        }
    }
}

/// Signal that a raw input was rejected and must be asked for again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Retry {
    /// Wager below the table minimum.
    #[error("that wager is below the table minimum of {min}")]
    BelowMinimum {
        /// The table minimum.
        min: u64,
    },
    /// Wager beyond what the bankroll covers.
    #[error("the bankroll only covers a wager up to {max}")]
    OverBankroll {
        /// The largest wager the bankroll covers.
        max: u64,
    },
    /// Input not recognized for this decision kind.
    #[error("input not recognized, try again")]
    Unrecognized,
}

/// Validates a proposed wager against the ledger.
///
/// # Errors
///
/// [`Retry::BelowMinimum`] under the table minimum, [`Retry::OverBankroll`]
/// beyond the bankroll.
///
/// # Example
///
/// ```
/// use twentyone::{Ledger, Retry, validate_wager};
///
/// let ledger = Ledger::new(100, 5);
/// assert_eq!(validate_wager(10, &ledger), Ok(10));
/// assert_eq!(
///     validate_wager(3, &ledger),
///     Err(Retry::BelowMinimum { min: 5 })
/// );
/// ```
pub const fn validate_wager(amount: u64, ledger: &Ledger) -> Result<u64, Retry> {
    if amount < ledger.min_wager() {
        return Err(Retry::BelowMinimum {
            min: ledger.min_wager(),
        });
    }
    if amount > ledger.bankroll() {
        return Err(Retry::OverBankroll {
            max: ledger.bankroll(),
        });
    }
    Ok(amount)
}

/// Parses a hit/stand reply. Only the first letter counts, case-insensitive.
///
/// # Errors
///
/// [`Retry::Unrecognized`] unless the reply starts with `h` or `s`.
pub fn parse_action(input: &str) -> Result<PlayerAction, Retry> {
    match first_letter(input) {
        Some('H') => Ok(PlayerAction::Hit),
        Some('S') => Ok(PlayerAction::Stand),
        _ => Err(Retry::Unrecognized),
    }
}

/// Parses a play-again reply. Only the first letter counts, case-insensitive.
///
/// # Errors
///
/// [`Retry::Unrecognized`] unless the reply starts with `y` or `n`.
pub fn parse_play_again(input: &str) -> Result<bool, Retry> {
    match first_letter(input) {
        Some('Y') => Ok(true),
        Some('N') => Ok(false),
        _ => Err(Retry::Unrecognized),
    }
}

fn first_letter(input: &str) -> Option<char> {
    input.trim().chars().next().map(|c| c.to_ascii_uppercase())
}

/// Supplies validated decisions on demand.
///
/// Calls block until a valid value exists; re-prompting on rejected input
/// happens behind this trait. The engine never sees a value the matching
/// validator would refuse.
pub trait DecisionInput {
    /// A wager satisfying [`validate_wager`] against `ledger`.
    fn wager(&mut self, ledger: &Ledger) -> u64;

    /// The next hit/stand choice.
    fn action(&mut self) -> PlayerAction;

    /// Whether to start another round.
    fn play_again(&mut self) -> bool;
}

/// Consumes human-readable game state for display.
///
/// Every method has a discarding default, so a shell only overrides what it
/// renders. The engine does not depend on any of this being shown.
pub trait GameDisplay {
    /// The player's hand after the deal or a draw.
    fn player_hand(&mut self, view: HandView<'_>) {
        let _ = view;
    }

    /// The dealer's hand. The view hides the hole card until the player's
    /// turn is over.
    fn dealer_hand(&mut self, view: HandView<'_>) {
        let _ = view;
    }

    /// Bankroll and wager state, plus any standoff amount on the table.
    fn ledger(&mut self, ledger: &Ledger, standoff: Option<u64>) {
        let _ = (ledger, standoff);
    }

    /// The settled result of a round.
    fn round_over(&mut self, summary: &RoundSummary) {
        let _ = summary;
    }
}

/// A display sink that discards everything.
impl GameDisplay for () {}
