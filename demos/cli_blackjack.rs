//! Interactive blackjack shell over the round engine.
//!
//! All prompting and re-prompting lives here. The engine only ever receives
//! values the validators in `twentyone::decision` have accepted.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    DecisionInput, DecisionKind, GameDisplay, HandView, Ledger, PlayerAction, RoundOutcome,
    RoundSummary, Session, SessionEnd, TableOptions, parse_action, parse_play_again,
    validate_wager,
};

struct ConsoleInput;

impl DecisionInput for ConsoleInput {
    fn wager(&mut self, ledger: &Ledger) -> u64 {
        loop {
            let raw = prompt_line(DecisionKind::Wager.prompt());
            let Ok(amount) = raw.parse::<u64>() else {
                println!("Please enter a number.");
                continue;
            };
            match validate_wager(amount, ledger) {
                Ok(wager) => {
                    println!("Let's play!");
                    return wager;
                }
                Err(retry) => println!("{retry}"),
            }
        }
    }

    fn action(&mut self) -> PlayerAction {
        loop {
            match parse_action(&prompt_line(DecisionKind::NextAction.prompt())) {
                Ok(action) => return action,
                Err(retry) => println!("{retry}"),
            }
        }
    }

    fn play_again(&mut self) -> bool {
        loop {
            match parse_play_again(&prompt_line(DecisionKind::NextRound.prompt())) {
                Ok(again) => return again,
                Err(retry) => println!("{retry}"),
            }
        }
    }
}

struct ConsoleView;

impl GameDisplay for ConsoleView {
    fn player_hand(&mut self, view: HandView<'_>) {
        println!("You hold {view}.");
    }

    fn dealer_hand(&mut self, view: HandView<'_>) {
        println!("Dealer shows {view}.");
    }

    fn ledger(&mut self, ledger: &Ledger, standoff: Option<u64>) {
        println!("You have {ledger}.");
        if let Some(amount) = standoff {
            println!("A standoff of {amount} is still on the table.");
        }
    }

    fn round_over(&mut self, summary: &RoundSummary) {
        match summary.outcome {
            RoundOutcome::Blackjack => println!("Blackjack! You win {}.", summary.net),
            RoundOutcome::Win => println!(
                "You win! {} on hand against the dealer's {}.",
                summary.player_points, summary.dealer_points
            ),
            RoundOutcome::DealerBust => println!("Dealer busts! You win {}.", summary.net),
            RoundOutcome::Push => println!("Push! Your money stays on the table."),
            RoundOutcome::Lose => println!(
                "You lose! Only {} on hand against the dealer's {}.",
                summary.player_points, summary.dealer_points
            ),
            RoundOutcome::PlayerBust => println!("You bust with {}!", summary.player_points),
        }
        println!("After this round you're holding {}.", summary.bankroll);
    }
}

fn main() {
    env_logger::init();

    let options = TableOptions::default();
    println!(
        "Blackjack: one seat, table minimum {}, {} decks in the shoe.",
        options.min_wager, options.decks
    );

    let bankroll = loop {
        match prompt_line("How much money do you put at risk today?").parse::<u64>() {
            Ok(amount) => break amount,
            Err(_) => println!("Please enter a number."),
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut session = Session::new(options, bankroll, seed);
    match session.run(&mut ConsoleInput, &mut ConsoleView) {
        Ok(summary) => {
            if summary.end == SessionEnd::InsufficientFunds {
                println!("You don't have enough money to play at this table. Game over!");
            }
            println!(
                "Thanks for your game! You're leaving the table with {} after {} round(s).",
                summary.bankroll, summary.rounds
            );
        }
        Err(err) => println!("The table is closing: {err}."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt} ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // EOF: treat it as walking away from the table.
        Ok(0) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_string(),
        Err(_) => String::new(),
    }
}
