use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// a lazy evaluator for a hand's strength.
///
/// we search for the strongest Ranking first and fall through
/// class by class using bitwise tests on the 52-bit Hand.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            // flush kickers live in the flush suit, not the whole hand
            Ranking::Flush(hi) => {
                let suit = self.find_suit_of_flush().expect("flush came from a suit");
                let ranks = u16::from(self.0.of(&suit)) & !u16::from(hi);
                Kickers::from(Self::strip(ranks, 4))
            }
            ranking => match ranking.n_kickers() {
                0 => Kickers::from(0u16),
                n => {
                    let ranks = u16::from(self.0) & ranking.mask();
                    Kickers::from(Self::strip(ranks, n))
                }
            },
        }
    }

    /// drop low bits until only the top n ranks remain
    fn strip(mut ranks: u16, n: usize) -> u16 {
        while ranks.count_ones() as usize > n {
            ranks &= ranks - 1;
        }
        ranks
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|triple| {
            self.find_rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            Ranking::Flush(Rank::from(bits))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|suit| self.find_rank_of_straight(self.0.of(&suit)))
            .map(|rank| match rank {
                Rank::Ace => Ranking::RoyalFlush,
                rank => Ranking::StraightFlush(rank),
            })
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                if high & u64::from(skip) != 0 {
                    continue;
                }
            }
            let mine = high & u64::from(self.0);
            if mine.count_ones() as usize >= n {
                return Some(Rank::lo(high));
            }
        }
        None
    }
}
