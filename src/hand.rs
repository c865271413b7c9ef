//! Hands and the point evaluator.

use std::fmt;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut points: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        points = points.saturating_add(card.value());
    }

    while points > 21 && aces > 0 {
        points -= 10;
        aces -= 1;
    }

    let soft = aces > 0 && points <= 21;
    (points, soft)
}

/// Best point total for an ordered card sequence.
///
/// Every Ace is first counted at 11, then demoted to 1 while the total still
/// exceeds 21. The result is the highest total not exceeding 21 when one
/// exists, otherwise the minimum total. Pure function of the sequence.
#[must_use]
pub fn evaluate(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Whether the sequence forms a soft total (an Ace still counted as 11).
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// One party's cards plus the derived point total.
///
/// A hand starts with the two cards dealt at round start, grows by one card
/// per hit, and is dropped when the round ends. The total is recomputed on
/// every addition, never on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    points: u8,
}

impl Hand {
    /// Creates the two-card hand dealt at round start.
    #[must_use]
    pub fn new(first: Card, second: Card) -> Self {
        let cards = vec![first, second];
        let points = evaluate(&cards);
        Self { cards, points }
    }

    /// Appends one drawn card and recomputes the total.
    pub fn hit(&mut self, card: Card) {
        self.cards.push(card);
        self.points = evaluate(&self.cards);
    }

    /// Current point total.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.points
    }

    /// The cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the hand holds at least one Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(|card| card.is_ace())
    }

    /// Whether the hand is soft (an Ace still counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Whether this is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.points == 21
    }

    /// Whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.points > 21
    }

    /// A rendering exposing only the first `visible` cards.
    ///
    /// `view(1)` is the dealer's up-card view.
    #[must_use]
    pub fn view(&self, visible: usize) -> HandView<'_> {
        HandView {
            cards: &self.cards,
            visible,
        }
    }

    /// A rendering of the whole hand with its total.
    #[must_use]
    pub fn full_view(&self) -> HandView<'_> {
        self.view(self.cards.len())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_view())
    }
}

/// A hand rendering that may hide trailing cards.
///
/// With every card visible the total is printed; with any card hidden the
/// total is withheld as well.
#[derive(Debug, Clone, Copy)]
pub struct HandView<'a> {
    cards: &'a [Card],
    visible: usize,
}

impl HandView<'_> {
    /// The cards this view exposes.
    #[must_use]
    pub fn shown(&self) -> &[Card] {
        &self.cards[..self.cards.len().min(self.visible)]
    }

    /// Number of cards this view hides.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.cards.len().saturating_sub(self.visible)
    }
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.shown().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }

        match self.hidden() {
            0 => write!(f, " ({} points)", evaluate(self.cards)),
            1 => f.write_str(" and one face-down card"),
            n => write!(f, " and {n} face-down cards"),
        }
    }
}
