use log::debug;

use crate::decision::{DecisionInput, GameDisplay, PlayerAction};
use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

use super::state::TurnState;

/// Runs the player's hit/stand loop until a terminal state.
///
/// The auto-stand check runs before every prompt: 21 is already optimal, and
/// 20 without an Ace is never worth another draw, so neither offers an
/// action.
pub(super) fn run<I, D>(
    hand: &mut Hand,
    shoe: &mut Shoe,
    input: &mut I,
    display: &mut D,
) -> Result<TurnState, ShoeError>
where
    I: DecisionInput + ?Sized,
    D: GameDisplay + ?Sized,
{
    loop {
        if hand.points() == 21 || (hand.points() == 20 && !hand.has_ace()) {
            debug!("player auto-stands on {}", hand.points());
            return Ok(TurnState::Standing);
        }

        match input.action() {
            PlayerAction::Stand => return Ok(TurnState::Standing),
            PlayerAction::Hit => {
                let card = shoe.deal_one()?;
                debug!("player draws {card}");
                hand.hit(card);
                display.player_hand(hand.full_view());

                if hand.is_bust() {
                    return Ok(TurnState::Bust);
                }
            }
        }
    }
}
