use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// the cards still unseen by anyone at the table.
/// selection via ::draw() is uniform over what remains.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::empty().complement())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a random card from the deck
    pub fn draw(&mut self) -> Card {
        assert!(self.0.size() > 0);
        let mut bits = u64::from(self.0);
        let i = rand::rng().random_range(0..self.0.size());
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }

    /// remove n random cards from the deck
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw())
            .fold(Hand::empty(), |hand, card| {
                Hand::add(hand, Hand::from(card))
            })
    }
}

/// deal only from cards that nobody holds
impl From<Hand> for Deck {
    fn from(seen: Hand) -> Self {
        Self(seen.complement())
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
