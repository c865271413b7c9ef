//! Round and session integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    Card, DECK_SIZE, DecisionInput, GameDisplay, HandView, Ledger, PlayerAction, Rank, Retry,
    RoundOutcome, Session, SessionEnd, Shoe, ShoeError, Suit, TableOptions, parse_action,
    parse_play_again, validate_wager,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Scripted decisions consumed front to back. Panics when the engine asks
/// for a decision the script did not plan for.
#[derive(Default)]
struct Script {
    wagers: Vec<u64>,
    actions: Vec<PlayerAction>,
    again: Vec<bool>,
}

impl DecisionInput for Script {
    fn wager(&mut self, _ledger: &Ledger) -> u64 {
        self.wagers.remove(0)
    }

    fn action(&mut self) -> PlayerAction {
        self.actions.remove(0)
    }

    fn play_again(&mut self) -> bool {
        self.again.remove(0)
    }
}

fn wager_only(wager: u64) -> Script {
    Script {
        wagers: vec![wager],
        ..Script::default()
    }
}

/// A session whose next round deals `draws` front to back.
fn session_with(bankroll: u64, draws: &[Card]) -> Session {
    let mut session = Session::new(TableOptions::default(), bankroll, 1);
    session.stack_shoe(Shoe::stacked(draws));
    session
}

#[test]
fn shoe_size_tracks_deck_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut shoe = Shoe::new(4, &mut rng);
    assert_eq!(shoe.remaining(), 4 * DECK_SIZE);

    shoe.deal_one().unwrap();
    assert_eq!(shoe.remaining(), 4 * DECK_SIZE - 1);
}

#[test]
fn empty_shoe_refuses_to_deal() {
    let mut shoe = Shoe::stacked(&[]);
    assert!(shoe.is_empty());
    assert_eq!(shoe.deal_one().unwrap_err(), ShoeError::Empty);
}

#[test]
fn ledger_settlement_is_the_only_bankroll_mutation() {
    let mut ledger = Ledger::new(100, 5);
    ledger.set_wager(10);
    assert_eq!(ledger.bankroll(), 100);

    ledger.add_payoff(-10);
    assert_eq!(ledger.bankroll(), 90);
    ledger.add_payoff(15);
    assert_eq!(ledger.bankroll(), 105);

    assert!(ledger.above_minimum_wager());
    assert!(!Ledger::new(4, 5).above_minimum_wager());
}

#[test]
fn wager_validator_enforces_table_limits() {
    let ledger = Ledger::new(50, 5);
    assert_eq!(validate_wager(5, &ledger), Ok(5));
    assert_eq!(validate_wager(50, &ledger), Ok(50));
    assert_eq!(
        validate_wager(4, &ledger),
        Err(Retry::BelowMinimum { min: 5 })
    );
    assert_eq!(
        validate_wager(51, &ledger),
        Err(Retry::OverBankroll { max: 50 })
    );
}

#[test]
fn reply_parsers_take_the_first_letter() {
    assert_eq!(parse_action("hit"), Ok(PlayerAction::Hit));
    assert_eq!(parse_action(" Stand"), Ok(PlayerAction::Stand));
    assert_eq!(parse_action("x"), Err(Retry::Unrecognized));

    assert_eq!(parse_play_again("yes"), Ok(true));
    assert_eq!(parse_play_again("No"), Ok(false));
    assert_eq!(parse_play_again(""), Err(Retry::Unrecognized));
}

#[test]
fn natural_against_natural_is_a_standoff() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ace),    // player
            card(Suit::Spades, Rank::King),   // player
            card(Suit::Diamonds, Rank::Ace),  // dealer
            card(Suit::Clubs, Rank::Queen),   // dealer
        ],
    );

    let summary = session
        .play_round(&mut wager_only(10), &mut ())
        .unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Push);
    assert_eq!(summary.player_points, 21);
    assert_eq!(summary.dealer_points, 21);
    assert_eq!(summary.net, 0);
    assert_eq!(summary.bankroll, 100);
    assert_eq!(session.standoff(), Some(10));
}

#[test]
fn natural_pays_three_to_two_floored() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ace),   // player
            card(Suit::Spades, Rank::King),  // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Nine), // dealer
        ],
    );

    let summary = session
        .play_round(&mut wager_only(10), &mut ())
        .unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Blackjack);
    assert_eq!(summary.net, 15);
    assert_eq!(summary.bankroll, 115);
    assert_eq!(session.standoff(), None);

    // An odd wager floors the half payout away.
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );
    let summary = session.play_round(&mut wager_only(5), &mut ()).unwrap();
    assert_eq!(summary.net, 7);
    assert_eq!(summary.bankroll, 107);
}

#[test]
fn natural_resolves_without_dealer_draws() {
    // The dealer sits on 16 and would have to draw, but a natural ends the
    // round first; an attempted draw would drain this four-card shoe.
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
        ],
    );

    let summary = session
        .play_round(&mut wager_only(10), &mut ())
        .unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Blackjack);
    assert_eq!(summary.dealer_points, 16);
    assert_eq!(summary.bankroll, 115);
}

#[test]
fn nineteen_beats_a_standing_dealer() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Eight), // dealer
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Win);
    assert_eq!(summary.net, 10);
    assert_eq!(summary.bankroll, 110);
    assert_eq!(session.standoff(), None);
}

#[test]
fn dealer_draws_through_seventeen_then_stands() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Spades, Rank::Nine),   // player
            card(Suit::Clubs, Rank::Ten),     // dealer
            card(Suit::Diamonds, Rank::Seven), // dealer, 17: still draws
            card(Suit::Hearts, Rank::Ace),    // dealer draw, 18: stands
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.dealer_points, 18);
    assert_eq!(summary.outcome, RoundOutcome::Win);
    assert_eq!(summary.bankroll, 110);
}

#[test]
fn dealer_never_stands_below_eighteen() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Clubs, Rank::Two),    // dealer
            card(Suit::Diamonds, Rank::Three), // dealer, 5
            card(Suit::Hearts, Rank::Four),  // dealer draw, 9
            card(Suit::Clubs, Rank::Five),   // dealer draw, 14
            card(Suit::Spades, Rank::Two),   // dealer draw, 16
            card(Suit::Diamonds, Rank::Two), // dealer draw, 18: stands
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.dealer_points, 18);
    assert_eq!(summary.outcome, RoundOutcome::Win);
}

#[test]
fn dealer_bust_pays_the_pool() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Six), // dealer, 16
            card(Suit::Hearts, Rank::King),  // dealer draw, 26: bust
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.outcome, RoundOutcome::DealerBust);
    assert_eq!(summary.dealer_points, 26);
    assert_eq!(summary.bankroll, 110);
}

#[test]
fn player_bust_loses_the_wager_and_skips_the_dealer() {
    // The dealer sits on 17 and would draw, but the shoe is drained by the
    // player's bust card; completing without a shoe error proves the dealer
    // phase never ran.
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Spades, Rank::Nine),   // player
            card(Suit::Clubs, Rank::Ten),     // dealer
            card(Suit::Diamonds, Rank::Seven), // dealer
            card(Suit::Hearts, Rank::Five),   // player hit, 24: bust
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Hit],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.outcome, RoundOutcome::PlayerBust);
    assert_eq!(summary.player_points, 24);
    assert_eq!(summary.dealer_points, 17);
    assert_eq!(summary.net, -10);
    assert_eq!(summary.bankroll, 90);
}

#[test]
fn twenty_without_an_ace_never_prompts() {
    // The action script is empty; any prompt would panic the test.
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Spades, Rank::Queen), // player, 20 with no ace
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Nine), // dealer
        ],
    );

    let summary = session
        .play_round(&mut wager_only(10), &mut ())
        .unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Win);
    assert_eq!(summary.player_points, 20);
    assert_eq!(summary.bankroll, 110);
}

#[test]
fn twenty_with_an_ace_still_prompts() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ace),   // player
            card(Suit::Spades, Rank::Nine),  // player, soft 20
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Nine), // dealer
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert!(script.actions.is_empty(), "the stand was consumed");
    assert_eq!(summary.outcome, RoundOutcome::Win);
}

#[test]
fn hitting_to_twenty_one_auto_stands() {
    // One hit reaches 21; the script holds no second action, so a further
    // prompt would panic.
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Five),  // player
            card(Suit::Spades, Rank::Nine),  // player, 14
            card(Suit::Diamonds, Rank::Ten), // dealer
            card(Suit::Clubs, Rank::Eight),  // dealer, 18
            card(Suit::Clubs, Rank::Seven),  // player hit, 21
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Hit],
        ..Script::default()
    };

    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.player_points, 21);
    assert_eq!(summary.outcome, RoundOutcome::Win);
    assert_eq!(summary.bankroll, 110);
}

#[test]
fn standoffs_carry_the_pool_until_a_win_settles_it() {
    let push_deal = [
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Spades, Rank::Queen), // player, 20
        card(Suit::Clubs, Rank::Ten),   // dealer
        card(Suit::Diamonds, Rank::Jack), // dealer, 20
    ];
    let mut session = session_with(100, &push_deal);

    let summary = session.play_round(&mut wager_only(10), &mut ()).unwrap();
    assert_eq!(summary.outcome, RoundOutcome::Push);
    assert_eq!(summary.bankroll, 100);
    assert_eq!(session.standoff(), Some(10));

    // A second standoff folds the previous pool into the new one.
    session.stack_shoe(Shoe::stacked(&push_deal));
    let summary = session.play_round(&mut wager_only(10), &mut ()).unwrap();
    assert_eq!(summary.outcome, RoundOutcome::Push);
    assert_eq!(summary.pool, 20);
    assert_eq!(summary.bankroll, 100);
    assert_eq!(session.standoff(), Some(20));

    // A clear win pays the whole accumulated pool.
    session.stack_shoe(Shoe::stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Queen), // player, 20
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine), // dealer, 19
    ]));
    let summary = session.play_round(&mut wager_only(10), &mut ()).unwrap();
    assert_eq!(summary.outcome, RoundOutcome::Win);
    assert_eq!(summary.pool, 30);
    assert_eq!(summary.net, 30);
    assert_eq!(summary.bankroll, 130);
    assert_eq!(session.standoff(), None);
}

#[test]
fn standoff_resolved_by_a_loss_forfeits_only_the_wager() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Queen), // player, 20
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Jack), // dealer, 20
        ],
    );
    session.play_round(&mut wager_only(10), &mut ()).unwrap();
    assert_eq!(session.standoff(), Some(10));

    session.stack_shoe(Shoe::stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine), // player, 19
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Jack), // dealer, 20
    ]));
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };
    let summary = session.play_round(&mut script, &mut ()).unwrap();

    assert_eq!(summary.outcome, RoundOutcome::Lose);
    assert_eq!(summary.net, -10);
    assert_eq!(summary.bankroll, 90);
    assert_eq!(session.standoff(), None);
}

#[test]
fn hit_on_a_drained_shoe_reports_the_empty_shoe() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),  // player
            card(Suit::Spades, Rank::Five), // player, 15
            card(Suit::Clubs, Rank::Ten),   // dealer
            card(Suit::Diamonds, Rank::Seven), // dealer
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Hit],
        ..Script::default()
    };

    assert_eq!(
        session.play_round(&mut script, &mut ()).unwrap_err(),
        ShoeError::Empty
    );
}

#[test]
fn session_ends_when_the_player_declines_another_round() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Queen), // player, 20
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine), // dealer, 19
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        again: vec![false],
        ..Script::default()
    };

    let summary = session.run(&mut script, &mut ()).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.end, SessionEnd::PlayerQuit);
    assert_eq!(summary.bankroll, 110);
}

#[test]
fn session_ends_gracefully_below_the_table_minimum() {
    let mut session = Session::new(TableOptions::default(), 4, 1);
    let mut script = Script::default();

    let summary = session.run(&mut script, &mut ()).unwrap();

    assert_eq!(summary.rounds, 0);
    assert_eq!(summary.end, SessionEnd::InsufficientFunds);
    assert_eq!(summary.bankroll, 4);
}

#[test]
fn session_ends_when_a_loss_drains_the_bankroll() {
    let mut session = session_with(
        10,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine), // player, 19
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Jack), // dealer, 20
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        again: vec![true],
    };

    let summary = session.run(&mut script, &mut ()).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.end, SessionEnd::InsufficientFunds);
    assert_eq!(summary.bankroll, 0);
}

/// Records how many cards each dealer rendering hid.
#[derive(Default)]
struct DealerViews {
    hidden: Vec<usize>,
}

impl GameDisplay for DealerViews {
    fn dealer_hand(&mut self, view: HandView<'_>) {
        self.hidden.push(view.hidden());
    }
}

#[test]
fn dealer_hole_card_stays_hidden_until_the_player_stands() {
    let mut session = session_with(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );
    let mut script = Script {
        wagers: vec![10],
        actions: vec![PlayerAction::Stand],
        ..Script::default()
    };
    let mut views = DealerViews::default();

    session.play_round(&mut script, &mut views).unwrap();

    assert_eq!(views.hidden, vec![1, 0]);
}
