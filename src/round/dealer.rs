use log::debug;

use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

use super::state::TurnState;

/// Runs the dealer's fixed draw policy until a terminal state.
///
/// The dealer draws on any total of 17 or below and stands on 18 through 21,
/// with no soft/hard distinction at 17. No decision input is consulted.
pub(super) fn run(hand: &mut Hand, shoe: &mut Shoe) -> Result<TurnState, ShoeError> {
    loop {
        if hand.is_bust() {
            debug!("dealer busts on {}", hand.points());
            return Ok(TurnState::Bust);
        }

        if hand.points() > 17 {
            return Ok(TurnState::Standing);
        }

        let card = shoe.deal_one()?;
        debug!("dealer draws {card}");
        hand.hit(card);
    }
}
