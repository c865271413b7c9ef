//! The dealing shoe: one or more shuffled decks dealt without replacement.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// A shoe built from whole 52-card decks.
///
/// Cards are dealt from the back of the sequence and never returned. A shoe
/// lives for exactly one round; the next round starts from a fresh one.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `decks` full decks in suit/rank order, then shuffles them with
    /// a uniform permutation.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds an unshuffled shoe that deals `cards` front to back.
    ///
    /// Intended for scripted rounds and tests.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Rank, Shoe, Suit};
    ///
    /// let ten = Card::new(Suit::Hearts, Rank::Ten);
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let mut shoe = Shoe::stacked(&[ten, ace]);
    /// assert_eq!(shoe.deal_one(), Ok(ten));
    /// assert_eq!(shoe.deal_one(), Ok(ace));
    /// ```
    #[must_use]
    pub fn stacked(cards: &[Card]) -> Self {
        let mut cards: Vec<Card> = cards.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn deal_one(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the shoe has been dealt out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
