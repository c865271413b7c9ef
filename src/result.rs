//! Round and session results.

/// How a round settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player's two-card 21 beat a lesser dealer hand.
    Blackjack,
    /// Player outscored the standing dealer.
    Win,
    /// Dealer went over 21; the player wins the pool.
    DealerBust,
    /// Standoff; the pool stays on the table for the next round.
    Push,
    /// Dealer outscored the standing player.
    Lose,
    /// Player went over 21; immediate loss, the dealer never plays.
    PlayerBust,
}

impl RoundOutcome {
    /// Whether the player took the pool.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win | Self::DealerBust)
    }

    /// Whether the round was a standoff.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::Push)
    }
}

/// The settled state of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// How the round settled.
    pub outcome: RoundOutcome,
    /// Player's final total.
    pub player_points: u8,
    /// Dealer's final total. The two-card total when the dealer never played.
    pub dealer_points: u8,
    /// The wager risked this round.
    pub wager: u64,
    /// Wager plus any carried standoff amount; what a win pays on.
    pub pool: u64,
    /// Signed bankroll change from settlement.
    pub net: i64,
    /// Bankroll after settlement.
    pub bankroll: u64,
    /// Amount left on the table if the round pushed.
    pub standoff: Option<u64>,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player declined another round.
    PlayerQuit,
    /// The bankroll fell below the table minimum.
    InsufficientFunds,
}

/// The final state of a whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds: u32,
    /// Bankroll the player leaves the table with.
    pub bankroll: u64,
    /// Why play stopped.
    pub end: SessionEnd,
}
