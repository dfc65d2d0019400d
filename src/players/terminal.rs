/// an interactive console seat built on dialoguer prompts.
/// menu options shrink to what is legal in the moment, and amounts
/// are validated against the stack before they leave the prompt.
pub struct Terminal {
    seat: Seat,
}

impl Terminal {
    pub fn new(stack: Chips) -> Self {
        Self {
            seat: Seat::new(stack),
        }
    }

    fn amount(&self, floor: Chips, ceiling: Chips) -> Chips {
        Input::new()
            .with_prompt("Amount ")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<Chips>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Enter a NUMBER"),
                }
            })
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<Chips>().unwrap() >= floor {
                    true => Ok(()),
                    false => Err("Wager too small"),
                }
            })
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<Chips>().unwrap() <= ceiling {
                    true => Ok(()),
                    false => Err("Wager too large"),
                }
            })
            .interact()
            .unwrap()
            .parse::<Chips>()
            .unwrap()
    }
}

impl Player for Terminal {
    fn make_move(&mut self, game: &Game) -> Action {
        let to_call = (game.last_bet() - self.seat.stake).max(0);
        let all = self.seat.stake + self.seat.stack;
        let choices = match to_call {
            0 => vec!["Check", "Bet", "All-in", "Fold"],
            _ => vec!["Call", "Raise", "All-in", "Fold"],
        };
        let selection = Select::new()
            .with_prompt(format!(
                "\nYOU HOLD [{}]   BOARD [{}]   POOL {}   TO CALL {}",
                game.hole(game.turn()),
                game.board(),
                game.pool(),
                to_call
            ))
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()
            .unwrap();
        match choices[selection] {
            "Fold" => self.fold(),
            "Check" => self.check(),
            "Call" => self.call(game),
            "All-in" => self.shove(),
            "Bet" => {
                let amount = self.amount(self.seat.stake, all);
                match amount == all {
                    true => self.shove(),
                    false => self.bet(amount),
                }
            }
            "Raise" => {
                let amount = self.amount(game.last_bet() + 1, all);
                match amount == all {
                    true => self.shove(),
                    false => self.raise_to(amount),
                }
            }
            _ => unreachable!(),
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
use crate::Chips;
use dialoguer::{Input, Select};
