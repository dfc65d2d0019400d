/// starting-hand quality, the preflop vocabulary of every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holding {
    Strong,
    Weak,
}

/// fixed preflop rating: pairs, anything with an ace, suited cards
/// jack or better, and king with a six or better play as strong.
pub fn rate_hole(hole: Hand) -> Holding {
    let lo = hole.take_min().expect("two hole cards");
    let hi = hole.take_max().expect("two hole cards");
    let pair = hi.rank() == lo.rank();
    let ace = hi.rank() == Rank::Ace;
    let suited = hi.suit() == lo.suit() && hi.rank() >= Rank::Jack;
    let king = hi.rank() == Rank::King && lo.rank() >= Rank::Six;
    match pair || ace || suited || king {
        true => Holding::Strong,
        false => Holding::Weak,
    }
}

/// fraction of unseen two-card holdings that lose to this seat's hand,
/// by exhaustive enumeration against the evaluator
pub fn win_probability(game: &Game, seat: usize) -> Probability {
    let mine = game.strength(seat);
    let board = game.board();
    let hands = HandIterator::from((2, game.seen(seat)));
    let total = hands.combinations();
    let wins = hands
        .map(|theirs| Strength::from(Hand::add(theirs, board)))
        .filter(|theirs| determine_winner(&mine, theirs) == Winner::One)
        .count();
    wins as Probability / total as Probability
}

use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::rank::Rank;
use crate::evaluation::showdown::{determine_winner, Winner};
use crate::evaluation::strength::Strength;
use crate::gameplay::game::Game;
use crate::Probability;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::stage::Stage;

    #[test]
    fn pairs_and_aces_are_strong() {
        assert_eq!(rate_hole(Hand::from("7s 7h")), Holding::Strong);
        assert_eq!(rate_hole(Hand::from("As 2h")), Holding::Strong);
    }

    #[test]
    fn suited_royals_are_strong() {
        assert_eq!(rate_hole(Hand::from("Js 4s")), Holding::Strong);
        assert_eq!(rate_hole(Hand::from("Jh 4s")), Holding::Weak);
    }

    #[test]
    fn king_needs_a_six() {
        assert_eq!(rate_hole(Hand::from("Kd 6c")), Holding::Strong);
        assert_eq!(rate_hole(Hand::from("Kd 5c")), Holding::Weak);
    }

    #[test]
    fn rags_are_weak() {
        assert_eq!(rate_hole(Hand::from("9c 2d")), Holding::Weak);
    }

    #[test]
    fn royal_flush_never_loses() {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ks"))
            .with_board(Hand::from("Qs Js Ts 2d 7c"))
            .with_stage(Stage::River);
        assert_eq!(win_probability(&game, 0), 1.0);
    }

    #[test]
    fn board_plays_both_ways() {
        let game = Game::new()
            .with_hole(0, Hand::from("3d 2c"))
            .with_board(Hand::from("As Ks Qs Js Ts"))
            .with_stage(Stage::River);
        // the board is a royal flush so every matchup splits
        assert_eq!(win_probability(&game, 0), 0.0);
    }
}
