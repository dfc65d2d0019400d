use super::card::Card;
use super::suit::Suit;

/// Hand is an unordered set of Cards stored as a 52-bit bitstring.
/// a single word covers any size of hand with no heap allocation,
/// and set algebra collapses into bitwise ops.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn random() -> Self {
        let ref mut rng = rand::rng();
        let cards = rand::Rng::random::<u64>(rng);
        Self(cards & Self::mask())
    }

    /// union of two disjoint hands
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }

    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0 & u64::from(card) != 0
    }
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }

    pub fn take_min(&self) -> Option<Card> {
        match self.size() {
            0 => None,
            _ => Some(Card::from(self.0.trailing_zeros() as u8)),
        }
    }
    pub fn take_max(&self) -> Option<Card> {
        match self.size() {
            0 => None,
            _ => Some(Card::from(64 - 1 - self.0.leading_zeros() as u8)),
        }
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// drains the hand from low card to high card
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.take_min()?;
        self.remove(card);
        Some(card)
    }
}

/// u64 isomorphism
/// we OR the cards together to get the bitstring
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Card injection
impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// one-way conversion to u16 Rank masks
/// zero allocation, just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0u16, |ranks, i| ranks | ((x >> (i * 3)) as u16 & (1 << i)))
    }
}

/// str isomorphism
/// this follows from the Vec<Card> isomorphism
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        Self::from(
            s.split_whitespace()
                .map(Card::from)
                .collect::<Vec<Card>>(),
        )
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn bijective_str() {
        let hand = Hand::from("2c Ts Jc Js");
        assert_eq!(hand, Hand::from(hand.to_string().as_str()));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::from("Jc Ts 2c Js").into_iter();
        assert_eq!(iter.next(), Some(Card::from("2c")));
        assert_eq!(iter.next(), Some(Card::from("Ts")));
        assert_eq!(iter.next(), Some(Card::from("Jc")));
        assert_eq!(iter.next(), Some(Card::from("Js")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac");
        assert_eq!(u16::from(hand.of(&Suit::Club)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::Diamond)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::Heart)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::Spade)), 0b_0100010001000);
    }

    #[test]
    fn complement_partition() {
        let hand = Hand::from("As Kd 7c 2h");
        let rest = hand.complement();
        assert_eq!(rest.size(), 48);
        assert_eq!(u64::from(hand) & u64::from(rest), 0);
    }
}
