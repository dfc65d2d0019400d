/// a seat driven by an external UI over a blocking request/response
/// pair of channels. the engine thread sends a Prompt and parks on the
/// reply; whatever drives the Controller answers with a Decision.
/// if either side hangs up the pending move resolves as a fold.
pub struct Human {
    seat: Seat,
    prompts: Sender<Prompt>,
    decisions: Receiver<Decision>,
}

/// everything a renderer needs to pose one decision
#[derive(Debug, Clone)]
pub struct Prompt {
    pub hole: Hand,
    pub board: Hand,
    pub pool: Chips,
    pub to_call: Chips,
    pub stack: Chips,
    pub stage: Stage,
}

/// the reply from the UI. Bet and Raise carry the round total.
#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
    AllIn,
}

/// the UI half of the pair
pub struct Controller {
    pub prompts: Receiver<Prompt>,
    pub decisions: Sender<Decision>,
}

impl Human {
    pub fn channel(stack: Chips) -> (Self, Controller) {
        let (prompts, prompted) = mpsc::channel();
        let (decides, decisions) = mpsc::channel();
        let human = Self {
            seat: Seat::new(stack),
            prompts,
            decisions,
        };
        let controller = Controller {
            prompts: prompted,
            decisions: decides,
        };
        (human, controller)
    }

    /// round totals from the UI get clamped to what the stack can cover
    fn wager(&mut self, amount: Chips, raising: bool) -> Action {
        let all = self.seat.stake + self.seat.stack;
        let amount = amount.clamp(self.seat.stake, all);
        if amount == all {
            self.shove()
        } else if raising {
            self.raise_to(amount)
        } else {
            self.bet(amount)
        }
    }
}

impl Player for Human {
    fn make_move(&mut self, game: &Game) -> Action {
        let prompt = Prompt {
            hole: game.hole(game.turn()),
            board: game.board(),
            pool: game.pool(),
            to_call: (game.last_bet() - self.seat.stake).max(0),
            stack: self.seat.stack,
            stage: game.stage(),
        };
        if self.prompts.send(prompt).is_err() {
            return self.fold();
        }
        match self.decisions.recv() {
            Err(_) => self.fold(),
            Ok(Decision::Fold) => self.fold(),
            Ok(Decision::Check) => self.check(),
            Ok(Decision::Call) => self.call(game),
            Ok(Decision::Bet(x)) => self.wager(x, false),
            Ok(Decision::Raise(x)) => self.wager(x, true),
            Ok(Decision::AllIn) => self.shove(),
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
use crate::cards::hand::Hand;
use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::seat::Seat;
use crate::gameplay::stage::Stage;
use crate::Chips;
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STACK;

    #[test]
    fn disconnect_resolves_as_fold() {
        let (mut human, controller) = Human::channel(STACK);
        drop(controller);
        let game = Game::new().with_stage(Stage::PreFlop);
        assert_eq!(human.make_move(&game), Action::Fold);
        assert!(human.seat().folded);
    }

    #[test]
    fn decisions_come_back_as_actions() {
        let (mut human, controller) = Human::channel(STACK);
        let handle = std::thread::spawn(move || {
            let prompt = controller.prompts.recv().unwrap();
            assert_eq!(prompt.to_call, 100);
            controller.decisions.send(Decision::Call).unwrap();
        });
        let game = Game::new().with_stage(Stage::PreFlop).with_last_bet(100);
        assert_eq!(human.make_move(&game), Action::Call(100));
        handle.join().unwrap();
    }

    #[test]
    fn oversized_bet_becomes_a_shove() {
        let (mut human, controller) = Human::channel(500);
        let handle = std::thread::spawn(move || {
            controller.prompts.recv().unwrap();
            controller.decisions.send(Decision::Bet(9999)).unwrap();
        });
        let game = Game::new().with_stage(Stage::PreFlop);
        assert_eq!(human.make_move(&game), Action::Shove(500));
        handle.join().unwrap();
    }
}
