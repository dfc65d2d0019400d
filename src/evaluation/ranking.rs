use crate::cards::rank::Rank;

/// the class of a five-card hand plus the ranks that define it.
/// variants are declared weakest to strongest so the derived Ord
/// agrees with showdown order. ties within a class fall through
/// to Kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
    RoyalFlush,
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// rank bits that do NOT participate in the made hand.
    /// only meaningful for classes that break ties on kickers.
    /// Flush is handled upstream since its kickers are suited.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::Flush(..)
            | Ranking::FullHouse(..)
            | Ranking::Straight(..)
            | Ranking::StraightFlush(..)
            | Ranking::RoyalFlush => unreachable!(),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::RoyalFlush => write!(f, "RoyalFlush"),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {}", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {}", r),
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::Flush(r) => write!(f, "Flush         {}", r),
            Ranking::Straight(r) => write!(f, "Straight      {}", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {}", r),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::OnePair(r) => write!(f, "OnePair       {}", r),
            Ranking::HighCard(r) => write!(f, "HighCard      {}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_order() {
        assert!(Ranking::RoyalFlush > Ranking::StraightFlush(Rank::King));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
        assert!(Ranking::Straight(Rank::Ace) < Ranking::Flush(Rank::Seven));
        assert!(Ranking::OnePair(Rank::Ace) < Ranking::TwoPair(Rank::Two, Rank::Three));
    }

    #[test]
    fn rank_breaks_ties_within_class() {
        assert!(Ranking::Straight(Rank::Ace) > Ranking::Straight(Rank::Five));
        assert!(Ranking::TwoPair(Rank::King, Rank::Two) > Ranking::TwoPair(Rank::Queen, Rank::Jack));
    }
}
