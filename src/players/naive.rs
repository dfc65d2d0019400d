/// equity-driven baseline. preflop it plays its fixed hole rating;
/// postflop it enumerates opponent holdings and wagers a pot fraction
/// scaled by its win probability, folding when the price is wrong.
pub struct NaivePlayer {
    seat: Seat,
}

impl NaivePlayer {
    pub fn new(stack: Chips) -> Self {
        Self {
            seat: Seat::new(stack),
        }
    }

    /// pot-proportional sizing: the likelier the win, the larger
    /// the fraction of the pool we are willing to put in
    fn bet_size(&self, game: &Game, probability: Probability) -> Chips {
        let sized = (game.pool() as Probability / (1.0 - probability)) as Chips;
        sized.min(self.seat.stack)
    }
}

impl Player for NaivePlayer {
    fn make_move(&mut self, game: &Game) -> Action {
        if game.stage() == Stage::PreFlop {
            match rate_hole(game.hole(game.turn())) {
                Holding::Weak if game.last_bet() > self.seat.stake => return self.fold(),
                Holding::Weak => return self.check(),
                Holding::Strong => {}
            }
            let open = self.seat.stack / 40;
            if open > game.last_bet() {
                return self.raise_to(open);
            } else {
                return self.call(game);
            }
        }
        let probability = win_probability(game, game.turn());
        // near-certain hands size to the full stack, so they shove
        let amount = match probability >= 0.95 {
            true => self.seat.stack,
            false => self.bet_size(game, probability),
        };
        if amount >= self.seat.stack {
            self.shove()
        } else if probability >= 0.5 {
            let price = (game.pool() - game.last_bet()) as Probability * (1.0 - probability);
            if game.last_bet() == 0 {
                self.bet(amount)
            } else if game.last_bet() as Probability > price {
                self.fold()
            } else {
                self.call(game)
            }
        } else if game.last_bet() == 0 {
            self.check()
        } else {
            self.fold()
        }
    }
    fn seat(&self) -> &Seat {
        &self.seat
    }
    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }
}

use super::equity::{rate_hole, win_probability, Holding};
use super::player::Player;
use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::seat::Seat;
use crate::gameplay::stage::Stage;
use crate::{Chips, Probability};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::STACK;

    #[test]
    fn weak_hole_folds_to_pressure() {
        let game = Game::new()
            .with_hole(0, Hand::from("9c 2d"))
            .with_stage(Stage::PreFlop)
            .with_last_bet(100);
        let mut player = NaivePlayer::new(STACK);
        assert_eq!(player.make_move(&game), Action::Fold);
    }

    #[test]
    fn weak_hole_checks_when_matched() {
        let game = Game::new()
            .with_hole(0, Hand::from("9c 2d"))
            .with_stage(Stage::PreFlop)
            .with_last_bet(100);
        let mut player = NaivePlayer::new(STACK);
        player.seat_mut().stake = 100;
        assert_eq!(player.make_move(&game), Action::Check);
    }

    #[test]
    fn strong_hole_opens_the_pot() {
        let game = Game::new()
            .with_hole(0, Hand::from("As Ah"))
            .with_stage(Stage::PreFlop)
            .with_last_bet(100);
        let mut player = NaivePlayer::new(STACK);
        let action = player.make_move(&game);
        assert_eq!(action, Action::Raise(STACK / 40));
    }

    #[test]
    fn marginal_hand_bets_within_its_stack() {
        // an underpair to two overcards is ahead of a random hole but
        // far from locked, so the wager stays pot-proportional
        let game = Game::new()
            .with_hole(0, Hand::from("9s 9h"))
            .with_board(Hand::from("Kc Qd 2s"))
            .with_stage(Stage::Flop)
            .with_pool(100);
        let mut player = NaivePlayer::new(STACK);
        match player.make_move(&game) {
            Action::Bet(amount) => assert!(amount < STACK),
            action => panic!("expected a pot-sized bet, got {}", action),
        }
    }

    #[test]
    fn locked_hand_piles_in() {
        // royal flush on a paired-free board, nothing can beat it
        let game = Game::new()
            .with_hole(0, Hand::from("As Ks"))
            .with_board(Hand::from("Qs Js Ts 2d 7c"))
            .with_stage(Stage::River)
            .with_pool(200);
        let mut player = NaivePlayer::new(STACK);
        let action = player.make_move(&game);
        assert_eq!(action, Action::Shove(STACK));
    }
}
