/// the single seam between the engine and any decision-maker.
///
/// implementors decide with make_move and own a Seat for their chips.
/// the provided combinators build each legal Action while keeping the
/// Seat's stack and stake consistent with the chips the Action claims,
/// so strategies can't desync their bookkeeping from the table.
pub trait Player {
    fn make_move(&mut self, game: &Game) -> Action;
    fn seat(&self) -> &Seat;
    fn seat_mut(&mut self) -> &mut Seat;

    fn fold(&mut self) -> Action {
        self.seat_mut().folded = true;
        Action::Fold
    }

    fn check(&mut self) -> Action {
        Action::Check
    }

    /// match the outstanding bet, clamped to what the stack can cover
    fn call(&mut self, game: &Game) -> Action {
        let gap = (game.last_bet() - self.seat().stake).clamp(0, self.seat().stack);
        let seat = self.seat_mut();
        seat.stack -= gap;
        seat.stake += gap;
        Action::Call(gap)
    }

    /// wager a round total with nothing outstanding
    fn bet(&mut self, amount: Chips) -> Action {
        let added = amount - self.seat().stake;
        assert!(added >= 0);
        assert!(added <= self.seat().stack);
        let seat = self.seat_mut();
        seat.stack -= added;
        seat.stake = amount;
        Action::Bet(amount)
    }

    /// wager a round total over an outstanding bet
    fn raise_to(&mut self, amount: Chips) -> Action {
        let added = amount - self.seat().stake;
        assert!(added >= 0);
        assert!(added <= self.seat().stack);
        let seat = self.seat_mut();
        seat.stack -= added;
        seat.stake = amount;
        seat.raised = true;
        Action::Raise(amount)
    }

    /// push the whole remaining stack in
    fn shove(&mut self) -> Action {
        let rest = self.seat().stack;
        let seat = self.seat_mut();
        seat.stake += rest;
        seat.stack = 0;
        Action::Shove(rest)
    }
}

use crate::gameplay::action::Action;
use crate::gameplay::game::Game;
use crate::gameplay::seat::Seat;
use crate::Chips;
