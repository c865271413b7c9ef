//! Session bankroll and wager tracking.

use std::fmt;

/// The player's bankroll, the table minimum, and the wager on the felt.
///
/// Settlement is the only bankroll mutator. Wager validation happens in the
/// decision layer before [`Ledger::set_wager`] is called; the ledger itself
/// records whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    bankroll: u64,
    min_wager: u64,
    wager: u64,
}

impl Ledger {
    /// Opens a ledger with `bankroll` at a table with `min_wager`.
    #[must_use]
    pub const fn new(bankroll: u64, min_wager: u64) -> Self {
        Self {
            bankroll,
            min_wager,
            wager: 0,
        }
    }

    /// Records the wager for the current round without validating it.
    pub const fn set_wager(&mut self, wager: u64) {
        self.wager = wager;
    }

    /// Applies a signed settlement delta to the bankroll.
    pub const fn add_payoff(&mut self, delta: i64) {
        self.bankroll = self.bankroll.saturating_add_signed(delta);
    }

    /// Whether the bankroll still covers the table minimum.
    ///
    /// When this turns false the session must end; there is not enough money
    /// to place another wager.
    #[must_use]
    pub const fn above_minimum_wager(&self) -> bool {
        self.bankroll >= self.min_wager
    }

    /// Current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Table minimum wager.
    #[must_use]
    pub const fn min_wager(&self) -> u64 {
        self.min_wager
    }

    /// Wager recorded for the current round.
    #[must_use]
    pub const fn wager(&self) -> u64 {
        self.wager
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in the bankroll, {} on the felt",
            self.bankroll, self.wager
        )
    }
}
