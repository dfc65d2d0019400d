use crate::Chips;

/// per-hand chip and action bookkeeping for one player.
/// stake is the amount wagered in the current betting round only.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    pub stack: Chips,
    pub stake: Chips,
    pub moved: bool,
    pub raised: bool,
    pub folded: bool,
}

impl Seat {
    pub fn new(stack: Chips) -> Self {
        Self {
            stack,
            stake: 0,
            moved: false,
            raised: false,
            folded: false,
        }
    }

    /// a new betting round opens. folds persist for the hand.
    pub fn reset(&mut self) {
        self.stake = 0;
        self.moved = false;
        self.raised = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_the_fold() {
        let mut seat = Seat::new(1000);
        seat.stake = 100;
        seat.moved = true;
        seat.raised = true;
        seat.folded = true;
        seat.reset();
        assert_eq!(seat.stake, 0);
        assert!(!seat.moved);
        assert!(!seat.raised);
        assert!(seat.folded);
    }
}
