/// the most passive seat possible: calls off the blind gap preflop,
/// then checks every street to showdown. useful as a baseline and in
/// tests that need a hand played to completion.
pub struct CheckPlayer {
    seat: Seat,
}

impl CheckPlayer {
    pub fn new(stack: Chips) -> Self {
        Self {
            seat: Seat::new(stack),
        }
    }
}

impl Player for CheckPlayer {
    fn make_move(&mut self, game: &Game) -> Action {
        if game.stage() == Stage::PreFlop && game.last_bet() != self.seat.stake {
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
