//! Round orchestration and the session loop.

use std::cmp::Ordering;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::decision::{DecisionInput, GameDisplay};
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::ledger::Ledger;
use crate::options::TableOptions;
use crate::result::{RoundOutcome, RoundSummary, SessionEnd, SessionSummary};
use crate::shoe::Shoe;

mod dealer;
mod player;
mod settle;
pub mod state;

pub use state::TurnState;

/// One seat at a blackjack table.
///
/// The session owns the shoe, both hands, the ledger, and the standoff
/// carry-over, and is their sole mutator. Decisions come in through a
/// [`DecisionInput`] and renderings go out through a [`GameDisplay`]; the
/// engine itself performs no I/O.
///
/// # Example
///
/// ```no_run
/// use twentyone::{Session, TableOptions};
///
/// let options = TableOptions::default();
/// let session = Session::new(options, 100, 42);
/// let _ = session;
/// ```
pub struct Session {
    /// Table parameters.
    options: TableOptions,
    /// Bankroll and wager state, alive for the whole session.
    ledger: Ledger,
    /// Pool left on the table by an unresolved standoff.
    standoff: Option<u64>,
    /// Shoe queued for the next round instead of a shuffled one.
    next_shoe: Option<Shoe>,
    /// Random number generator for shoe shuffling.
    rng: ChaCha8Rng,
}

impl Session {
    /// Seats a player with `bankroll` at a table configured by `options`.
    ///
    /// The seed drives every shuffle of the session, so a seeded session
    /// replays identically given the same decisions.
    #[must_use]
    pub fn new(options: TableOptions, bankroll: u64, seed: u64) -> Self {
        Self {
            ledger: Ledger::new(bankroll, options.min_wager),
            options,
            standoff: None,
            next_shoe: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The session's ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The unresolved standoff amount, if the last round pushed.
    #[must_use]
    pub const fn standoff(&self) -> Option<u64> {
        self.standoff
    }

    /// The table parameters this session was opened with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Queues a prepared shoe for the next round instead of shuffling one.
    ///
    /// Useful for scripted rounds and tests; see [`Shoe::stacked`].
    pub fn stack_shoe(&mut self, shoe: Shoe) {
        self.next_shoe = Some(shoe);
    }

    fn fresh_shoe(&mut self) -> Shoe {
        self.next_shoe
            .take()
            .unwrap_or_else(|| Shoe::new(self.options.decks, &mut self.rng))
    }

    /// Plays one full round: deal, wager, initial blackjack check, player
    /// turn, dealer turn, settlement.
    ///
    /// The dealer's hole card stays hidden until the player's turn is over.
    /// A standoff carried from the previous round joins the wager pool and is
    /// resolved by this round's outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe runs out mid-round. With the
    /// default deck count this cannot happen in a single round.
    pub fn play_round<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<RoundSummary, ShoeError>
    where
        I: DecisionInput + ?Sized,
        D: GameDisplay + ?Sized,
    {
        let mut shoe = self.fresh_shoe();

        let mut player = Hand::new(shoe.deal_one()?, shoe.deal_one()?);
        let mut dealer = Hand::new(shoe.deal_one()?, shoe.deal_one()?);
        debug!(
            "dealt: player {}, dealer {}",
            player.points(),
            dealer.points()
        );

        let wager = input.wager(&self.ledger);
        self.ledger.set_wager(wager);
        // A carried standoff joins the pool; only the new wager is at risk.
        let pool = wager + self.standoff.unwrap_or(0);

        display.ledger(&self.ledger, self.standoff);
        display.player_hand(player.full_view());

        let outcome = if player.is_natural() {
            // The dealer's hand resolves the natural without drawing further.
            display.dealer_hand(dealer.full_view());
            if dealer.points() == 21 {
                RoundOutcome::Push
            } else {
                RoundOutcome::Blackjack
            }
        } else {
            display.dealer_hand(dealer.view(1));

            if player::run(&mut player, &mut shoe, input, display)? == TurnState::Bust {
                // Immediate loss; the dealer does not play.
                RoundOutcome::PlayerBust
            } else if dealer::run(&mut dealer, &mut shoe)? == TurnState::Bust {
                display.dealer_hand(dealer.full_view());
                RoundOutcome::DealerBust
            } else {
                display.dealer_hand(dealer.full_view());
                match player.points().cmp(&dealer.points()) {
                    Ordering::Greater => RoundOutcome::Win,
                    Ordering::Less => RoundOutcome::Lose,
                    Ordering::Equal => RoundOutcome::Push,
                }
            }
        };

        let summary = settle::settle(
            outcome,
            player.points(),
            dealer.points(),
            pool,
            self.options.blackjack_pays,
            &mut self.ledger,
            &mut self.standoff,
        );
        display.round_over(&summary);

        Ok(summary)
    }

    /// Runs rounds until the player quits or cannot cover the table minimum.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if a shoe runs out mid-round.
    pub fn run<I, D>(&mut self, input: &mut I, display: &mut D) -> Result<SessionSummary, ShoeError>
    where
        I: DecisionInput + ?Sized,
        D: GameDisplay + ?Sized,
    {
        let mut rounds: u32 = 0;

        let end = loop {
            if !self.ledger.above_minimum_wager() {
                info!("bankroll below the table minimum, session over");
                break SessionEnd::InsufficientFunds;
            }

            self.play_round(input, display)?;
            rounds += 1;

            if !input.play_again() {
                break SessionEnd::PlayerQuit;
            }
        };

        Ok(SessionSummary {
            rounds,
            bankroll: self.ledger.bankroll(),
            end,
        })
    }
}
