use super::ranking::Ranking;

/// the ten hand classes with their canonical 1-10 numbering,
/// 1 being strongest. this is the vocabulary the game tree speaks:
/// classifier tags carry a Category, never a full Ranking.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    RoyalFlush = 1,
    StraightFlush = 2,
    FourOAK = 3,
    FullHouse = 4,
    Flush = 5,
    Straight = 6,
    ThreeOAK = 7,
    TwoPair = 8,
    OnePair = 9,
    HighCard = 10,
}

impl Category {
    /// every class from strongest to weakest
    pub const fn all() -> [Category; 10] {
        [
            Category::RoyalFlush,
            Category::StraightFlush,
            Category::FourOAK,
            Category::FullHouse,
            Category::Flush,
            Category::Straight,
            Category::ThreeOAK,
            Category::TwoPair,
            Category::OnePair,
            Category::HighCard,
        ]
    }

    /// a lower number is a stronger class
    pub fn outranks(&self, other: &Category) -> bool {
        (*self as u8) < (*other as u8)
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::RoyalFlush => Category::RoyalFlush,
            Ranking::StraightFlush(_) => Category::StraightFlush,
            Ranking::FourOAK(_) => Category::FourOAK,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::Flush(_) => Category::Flush,
            Ranking::Straight(_) => Category::Straight,
            Ranking::ThreeOAK(_) => Category::ThreeOAK,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::HighCard(_) => Category::HighCard,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::RoyalFlush => "Royal Flush",
                Category::StraightFlush => "Straight Flush",
                Category::FourOAK => "Four of a Kind",
                Category::FullHouse => "Full House",
                Category::Flush => "Flush",
                Category::Straight => "Straight",
                Category::ThreeOAK => "Three of a Kind",
                Category::TwoPair => "Two Pair",
                Category::OnePair => "Pair",
                Category::HighCard => "High Card",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn numbering() {
        assert_eq!(Category::RoyalFlush as u8, 1);
        assert_eq!(Category::HighCard as u8, 10);
    }

    #[test]
    fn outranking() {
        assert!(Category::Flush.outranks(&Category::Straight));
        assert!(!Category::OnePair.outranks(&Category::OnePair));
        assert!(!Category::HighCard.outranks(&Category::TwoPair));
    }

    #[test]
    fn collapses_ranking() {
        assert_eq!(
            Category::from(Ranking::FullHouse(Rank::Two, Rank::Three)),
            Category::FullHouse
        );
        assert_eq!(Category::from(Ranking::HighCard(Rank::Ace)), Category::HighCard);
    }
}
