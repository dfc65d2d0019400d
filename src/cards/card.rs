#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its position 0-51 in a sorted deck
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism
/// each card is one bit turned on in the low 52
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Self::from(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
/// "Th" is the ten of hearts
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        assert!(s.len() == 2, "Invalid card str: {}", s);
        Self {
            rank: Rank::from(&s[0..1]),
            suit: Suit::from(&s[1..2]),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let card = Card::from("Ts");
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_u64() {
        let card = Card::from("Ts");
        assert!(card == Card::from(u64::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Card::from((Rank::Queen, Suit::Diamond));
        assert!(card == Card::from(card.to_string().as_str()));
    }
}
