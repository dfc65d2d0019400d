/// a betting move. Bet and Raise carry the total wagered this round,
/// Call carries the gap closed, Shove carries the stack pushed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    Raise(Chips),
    Shove(Chips),
}

impl Action {
    /// wire code, stable across serialization and logs
    pub fn code(&self) -> u8 {
        match self {
            Action::Fold => 0,
            Action::Check => 1,
            Action::Call(_) => 2,
            Action::Bet(_) => 3,
            Action::Raise(_) => 4,
            Action::Shove(_) => 5,
        }
    }

    /// chips attached to the move. folds conventionally log -1.
    pub fn amount(&self) -> Chips {
        match self {
            Action::Fold => -1,
            Action::Check => 0,
            Action::Call(x) | Action::Bet(x) | Action::Raise(x) | Action::Shove(x) => *x,
        }
    }

    /// whether this move reopens the action for the opponent
    pub fn reopens(&self) -> bool {
        match self {
            Action::Raise(_) | Action::Shove(_) => true,
            Action::Bet(x) => *x > 0,
            _ => false,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call(x) => write!(f, "{}", format!("CALL  {}", x).yellow()),
            Action::Bet(x) => write!(f, "{}", format!("BET   {}", x).green()),
            Action::Raise(x) => write!(f, "{}", format!("RAISE {}", x).green()),
            Action::Shove(x) => write!(f, "{}", format!("SHOVE {}", x).magenta()),
        }
    }
}

use crate::Chips;
use colored::*;
use std::fmt::{Display, Formatter, Result};
