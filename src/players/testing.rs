/// sparring partner for evaluating other strategies: opens small,
/// then calls any pressure and checks back the rest. never folds,
/// never raises, so every line it plays reaches a showdown.
pub struct TestingPlayer {
    seat: Seat,
}

impl TestingPlayer {
    pub fn new(stack: Chips) -> Self {
        Self {
            seat: Seat::new(stack),
        }
    }
}

impl Player for TestingPlayer {
    fn make_move(&mut self, game: &Game) -> Action {
        if game.stage() == Stage::PreFlop && self.seat.stake == 0 && game.last_bet() == 0 {
            let open = self.seat.stack / 40;
            self.bet(open)
        } else if game.last_bet() > 0 {
            self.call(game)
        } else {
            self.check()
        }
    }
    fn seat(&self) -> &Seat {
        &self.seat
    }
    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }
}

use super::player::Player;
use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::seat::Seat;
use crate::gameplay::stage::Stage;
use crate::Chips;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::engine::run_round;
    use crate::STACK;

    #[test]
    fn never_folds() {
        let mut one = TestingPlayer::new(STACK);
        let mut two = TestingPlayer::new(STACK);
        let states = run_round(&mut one, &mut two);
        let last = states.last().unwrap();
        assert!(!last.folded(0));
        assert!(!last.folded(1));
        assert!(last.winner().is_some());
    }
}
