/// full observable table state for one hand of heads-up poker.
/// moves mutate it through run_move, stage transitions through
/// next_stage, and settlement through check_winner. a Game clones
/// cheaply, which is how the engine snapshots a hand's history.
#[derive(Debug, Clone)]
pub struct Game {
    pool: Chips,
    last_bet: Chips,
    holes: [Hand; 2],
    board: Hand,
    logs: [Vec<Action>; 2],
    stage: Stage,
    turn: usize,
    winner: Option<Winner>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            pool: 0,
            last_bet: 0,
            holes: [Hand::empty(); 2],
            board: Hand::empty(),
            logs: [Vec::new(), Vec::new()],
            stage: Stage::NotDealt,
            turn: 0,
            winner: None,
        }
    }

    pub fn pool(&self) -> Chips {
        self.pool
    }
    pub fn last_bet(&self) -> Chips {
        self.last_bet
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn turn(&self) -> usize {
        self.turn
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn hole(&self, seat: usize) -> Hand {
        self.holes[seat]
    }
    pub fn log(&self, seat: usize) -> &[Action] {
        &self.logs[seat]
    }
    pub fn folded(&self, seat: usize) -> bool {
        matches!(self.logs[seat].last(), Some(Action::Fold))
    }

    /// cards visible from one seat
    pub fn seen(&self, seat: usize) -> Hand {
        Hand::add(self.holes[seat], self.board)
    }
    /// showdown value of one seat's hole plus board
    pub fn strength(&self, seat: usize) -> Strength {
        Strength::from(self.seen(seat))
    }
    /// cards that nobody at the table has seen yet
    pub fn deck(&self) -> Deck {
        Deck::from(Hand::add(Hand::add(self.holes[0], self.holes[1]), self.board))
    }

    /// blinds enter the pot before anyone acts
    pub fn post(&mut self, blinds: Chips, to_match: Chips) {
        self.pool += blinds;
        self.last_bet = to_match;
    }

    /// apply one betting move. delta is the mover's pool contribution,
    /// already deducted from their stack by the Player combinators.
    /// a fold freezes the turn so the hand ends on the folder.
    pub fn run_move(&mut self, action: Action, delta: Chips) {
        assert!(self.winner.is_none());
        assert!(self.stage.betting());
        assert!(delta >= 0);
        self.logs[self.turn].push(action);
        self.pool += delta;
        match action {
            Action::Fold => return,
            Action::Bet(x) | Action::Raise(x) => self.last_bet = x,
            Action::Shove(_) => self.last_bet += delta,
            Action::Check | Action::Call(_) => {}
        }
        self.turn = 1 - self.turn;
    }

    /// advance the stage once a betting round closes.
    /// a no-op after any fold or once a winner is known.
    pub fn next_stage(&mut self) {
        if self.winner.is_some() || self.folded(0) || self.folded(1) {
            return;
        }
        match self.stage {
            Stage::Showdown => return,
            Stage::NotDealt => {
                let mut deck = self.deck();
                self.holes = [deck.deal(2), deck.deal(2)];
            }
            Stage::PreFlop => self.reveal(3),
            Stage::Flop | Stage::Turn => self.reveal(1),
            Stage::River => {}
        }
        self.stage = self.stage.next();
        self.last_bet = 0;
        if self.stage == Stage::Showdown {
            self.showdown();
        }
    }

    /// settle the hand if it is over. idempotent. with all_in the board
    /// is dealt out to five and the hand jumps straight to showdown.
    pub fn check_winner(&mut self, all_in: bool) -> Option<Winner> {
        if self.winner.is_some() {
        } else if self.folded(0) {
            self.winner = Some(Winner::Two);
        } else if self.folded(1) {
            self.winner = Some(Winner::One);
        } else if all_in {
            self.reveal(5 - self.board.size());
            self.stage = Stage::Showdown;
            self.showdown();
        } else if self.stage == Stage::Showdown {
            self.showdown();
        }
        self.winner
    }

    /// all moves in chronological order. the turn alternates strictly
    /// between seats, seat 0 first, so the logs interleave exactly.
    pub fn move_sequence(&self) -> Vec<Action> {
        let mut moves = Vec::new();
        for i in 0..self.logs[0].len().max(self.logs[1].len()) {
            if let Some(action) = self.logs[0].get(i) {
                moves.push(*action);
            }
            if let Some(action) = self.logs[1].get(i) {
                moves.push(*action);
            }
        }
        moves
    }

    fn reveal(&mut self, n: usize) {
        let mut deck = self.deck();
        self.board = Hand::add(self.board, deck.deal(n));
    }

    fn showdown(&mut self) {
        if self.winner.is_none() {
            let one = self.strength(0);
            let two = self.strength(1);
            self.winner = Some(determine_winner(&one, &two));
        }
    }
}

/// consuming builders. the tree player uses these to pose
/// counterfactual views of a live game, tests use them for fixtures.
impl Game {
    pub fn with_hole(mut self, seat: usize, hole: Hand) -> Self {
        self.holes[seat] = hole;
        self
    }
    pub fn with_board(mut self, board: Hand) -> Self {
        self.board = board;
        self
    }
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }
    pub fn with_turn(mut self, turn: usize) -> Self {
        self.turn = turn;
        self
    }
    pub fn with_pool(mut self, pool: Chips) -> Self {
        self.pool = pool;
        self
    }
    pub fn with_last_bet(mut self, last_bet: Chips) -> Self {
        self.last_bet = last_bet;
        self
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} | pool {} | to match {} | board [{}]",
            self.stage, self.pool, self.last_bet, self.board
        )
    }
}

use super::action::Action;
use super::stage::Stage;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::showdown::{determine_winner, Winner};
use crate::evaluation::strength::Strength;
use crate::Chips;
