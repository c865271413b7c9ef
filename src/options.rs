//! Table configuration.

/// Blackjack payout multiplier as an exact ratio, floored at payout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Numerator.
    pub numerator: u64,
    /// Denominator.
    pub denominator: u64,
}

impl PayoutRatio {
    /// The conventional 3:2 natural payout.
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };

    /// The stingier 6:5 payout found on some tables.
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };

    /// `floor(amount * numerator / denominator)`.
    #[must_use]
    pub const fn apply(self, amount: u64) -> u64 {
        amount * self.numerator / self.denominator
    }
}

/// Session parameters for a table, supplied once at session start.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default().with_decks(6).with_min_wager(10);
/// assert_eq!(options.decks, 6);
/// assert_eq!(options.min_wager, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks per shoe.
    pub decks: u8,
    /// Table minimum wager.
    pub min_wager: u64,
    /// Payout ratio for a natural 21.
    pub blackjack_pays: PayoutRatio,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            min_wager: 5,
            blackjack_pays: PayoutRatio::THREE_TO_TWO,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks per shoe.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the table minimum wager.
    #[must_use]
    pub const fn with_min_wager(mut self, min_wager: u64) -> Self {
        self.min_wager = min_wager;
        self
    }

    /// Sets the payout ratio for a natural 21.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{PayoutRatio, TableOptions};
    ///
    /// let options = TableOptions::default().with_blackjack_pays(PayoutRatio::SIX_TO_FIVE);
    /// assert_eq!(options.blackjack_pays.apply(10), 12);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }
}
