/// how large a wager is relative to the pool it attacks.
/// the grade doubles the pool at every step, and each grade
/// maps back to the pot multiple used when we size our own bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Volatility {
    Conservative,
    Moderate,
    Aggressive,
    VeryAggressive,
}

impl Volatility {
    pub const fn all() -> [Volatility; 4] {
        [
            Volatility::Conservative,
            Volatility::Moderate,
            Volatility::Aggressive,
            Volatility::VeryAggressive,
        ]
    }

    /// classify an observed wager against the pool it was made into
    pub fn grade(pool: Chips, amount: Chips) -> Self {
        if amount <= pool {
            Volatility::Conservative
        } else if amount <= pool * 2 {
            Volatility::Moderate
        } else if amount <= pool * 4 {
            Volatility::Aggressive
        } else {
            Volatility::VeryAggressive
        }
    }

    /// the pool multiple we wager when acting at this grade
    pub fn pot_multiple(&self) -> Chips {
        match self {
            Volatility::Conservative => 1,
            Volatility::Moderate => 2,
            Volatility::Aggressive => 4,
            Volatility::VeryAggressive => 8,
        }
    }

    pub fn random() -> Self {
        let ref mut rng = rand::rng();
        Self::all()[rng.random_range(0..4)]
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Volatility::Conservative => write!(f, "Conservative"),
            Volatility::Moderate => write!(f, "Moderate"),
            Volatility::Aggressive => write!(f, "Aggressive"),
            Volatility::VeryAggressive => write!(f, "Very Aggressive"),
        }
    }
}

/// one atom of a situation description. a node in the game tree is
/// keyed by a set of these: what we hold, what the board might bring,
/// what the opponent could have, and what move was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    StrongHole,
    WeakHole,
    Made(Category),
    HighCard(Rank),
    Lucky(Category),
    Threat(Category),
    Fold,
    Check,
    Call,
    AllIn,
    Bet(Volatility),
    Raise(Volatility),
}

impl Tag {
    /// move tags advance the action cursor during insertion;
    /// situational tags do not
    pub fn is_move(&self) -> bool {
        matches!(
            self,
            Tag::Fold | Tag::Check | Tag::Call | Tag::AllIn | Tag::Bet(_) | Tag::Raise(_)
        )
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tag::StrongHole => write!(f, "Strong Hole"),
            Tag::WeakHole => write!(f, "Weak Hole"),
            Tag::Made(category) => write!(f, "{} in hand", category),
            Tag::HighCard(rank) => write!(f, "High Card {} in hand", rank),
            Tag::Lucky(category) => write!(f, "{} if lucky", category),
            Tag::Threat(category) => write!(f, "{} is a threat", category),
            Tag::Fold => write!(f, "Fold"),
            Tag::Check => write!(f, "Check"),
            Tag::Call => write!(f, "Call"),
            Tag::AllIn => write!(f, "All-in"),
            Tag::Bet(volatility) => write!(f, "{} Bet", volatility),
            Tag::Raise(volatility) => write!(f, "{} Raise", volatility),
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn category(s: &str) -> Result<Category> {
            Category::all()
                .into_iter()
                .find(|c| c.to_string() == s)
                .with_context(|| format!("no such category: {}", s))
        }
        fn volatility(s: &str) -> Result<Volatility> {
            Volatility::all()
                .into_iter()
                .find(|v| v.to_string() == s)
                .with_context(|| format!("no such volatility: {}", s))
        }
        match s {
            "Strong Hole" => Ok(Tag::StrongHole),
            "Weak Hole" => Ok(Tag::WeakHole),
            "Fold" => Ok(Tag::Fold),
            "Check" => Ok(Tag::Check),
            "Call" => Ok(Tag::Call),
            "All-in" => Ok(Tag::AllIn),
            s => {
                if let Some(body) = s.strip_suffix(" in hand") {
                    if let Some(rank) = body.strip_prefix("High Card ") {
                        Rank::descending()
                            .find(|r| r.to_string() == rank)
                            .map(Tag::HighCard)
                            .with_context(|| format!("no such rank: {}", rank))
                    } else {
                        category(body).map(Tag::Made)
                    }
                } else if let Some(body) = s.strip_suffix(" if lucky") {
                    category(body).map(Tag::Lucky)
                } else if let Some(body) = s.strip_suffix(" is a threat") {
                    category(body).map(Tag::Threat)
                } else if let Some(body) = s.strip_suffix(" Bet") {
                    volatility(body).map(Tag::Bet)
                } else if let Some(body) = s.strip_suffix(" Raise") {
                    volatility(body).map(Tag::Raise)
                } else {
                    bail!("no such tag: {}", s)
                }
            }
        }
    }
}

use crate::cards::rank::Rank;
use crate::evaluation::category::Category;
use crate::Chips;
use anyhow::{bail, Context, Result};
use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_double_with_the_pool() {
        assert_eq!(Volatility::grade(100, 100), Volatility::Conservative);
        assert_eq!(Volatility::grade(100, 150), Volatility::Moderate);
        assert_eq!(Volatility::grade(100, 300), Volatility::Aggressive);
        assert_eq!(Volatility::grade(100, 500), Volatility::VeryAggressive);
    }

    #[test]
    fn move_tags_are_moves() {
        assert!(Tag::Fold.is_move());
        assert!(Tag::Bet(Volatility::Moderate).is_move());
        assert!(!Tag::StrongHole.is_move());
        assert!(!Tag::Threat(Category::Flush).is_move());
    }

    #[test]
    fn bijective_str() {
        let tags = [
            Tag::StrongHole,
            Tag::WeakHole,
            Tag::Made(Category::TwoPair),
            Tag::HighCard(Rank::King),
            Tag::Lucky(Category::Flush),
            Tag::Threat(Category::Straight),
            Tag::Fold,
            Tag::Check,
            Tag::Call,
            Tag::AllIn,
            Tag::Bet(Volatility::VeryAggressive),
            Tag::Raise(Volatility::Conservative),
        ];
        for tag in tags {
            assert_eq!(tag, tag.to_string().parse().unwrap());
        }
    }
}
