use super::category::Category;
use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;

/// the total showdown value of a set of cards.
/// Ranking decides between classes, Kickers break ties within one,
/// so the derived Ord is exactly the showdown comparison.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn category(&self) -> Category {
        Category::from(self.ranking)
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        let evaluator = Evaluator::from(hand);
        let ranking = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(ranking);
        Self { ranking, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18} {}", self.ranking, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn kickers_break_ties() {
        let hi = Strength::from(Hand::from("As Ah Kd Qc Js"));
        let lo = Strength::from(Hand::from("Ac Ad Kh Qs Ts"));
        assert!(hi > lo);
    }

    #[test]
    fn classes_dominate_kickers() {
        let pair = Strength::from(Hand::from("2s 2h Ad Kc Qs"));
        let high = Strength::from(Hand::from("As Kh Qd Jc 9s"));
        assert!(pair > high);
    }

    #[test]
    fn category_projection() {
        let strength = Strength::from(Hand::from("As Ks Qs Js Ts"));
        assert_eq!(strength.ranking(), Ranking::RoyalFlush);
        assert_eq!(strength.category(), Category::RoyalFlush);
        let strength = Strength::from(Hand::from("2s 2h 7d 8c 9s"));
        assert_eq!(strength.ranking(), Ranking::OnePair(Rank::Two));
        assert_eq!(strength.category(), Category::OnePair);
    }
}
