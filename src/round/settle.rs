use log::info;

use crate::ledger::Ledger;
use crate::options::PayoutRatio;
use crate::result::{RoundOutcome, RoundSummary};

/// Applies the payout for `outcome` and updates the standoff carry-over.
///
/// A win pays the whole pool (wager plus any carried standoff amount), a
/// natural pays the pool at the table ratio, a loss forfeits only the wager
/// risked this round, and a push changes nothing: the pool stays on the
/// table and is resolved by the next non-tied round.
#[expect(
    clippy::cast_possible_wrap,
    reason = "bankroll and pool values fit in i64"
)]
pub(super) fn settle(
    outcome: RoundOutcome,
    player_points: u8,
    dealer_points: u8,
    pool: u64,
    blackjack_pays: PayoutRatio,
    ledger: &mut Ledger,
    standoff: &mut Option<u64>,
) -> RoundSummary {
    let wager = ledger.wager();

    let net: i64 = match outcome {
        RoundOutcome::Blackjack => blackjack_pays.apply(pool) as i64,
        RoundOutcome::Win | RoundOutcome::DealerBust => pool as i64,
        RoundOutcome::Lose | RoundOutcome::PlayerBust => -(wager as i64),
        RoundOutcome::Push => 0,
    };

    ledger.add_payoff(net);
    *standoff = if outcome.is_push() { Some(pool) } else { None };

    info!(
        "round settled: {outcome:?}, net {net}, bankroll {}",
        ledger.bankroll()
    );

    RoundSummary {
        outcome,
        player_points,
        dealer_points,
        wager,
        pool,
        net,
        bankroll: ledger.bankroll(),
        standoff: *standoff,
    }
}
