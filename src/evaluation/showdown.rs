use super::strength::Strength;

/// outcome of a finished hand, heads up so there are only three
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    One,
    Two,
    Split,
}

impl Winner {
    /// the winner sitting in a given seat index
    pub fn of(seat: usize) -> Self {
        match seat {
            0 => Winner::One,
            1 => Winner::Two,
            _ => panic!("heads up has two seats, got {}", seat),
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Winner::One => write!(f, "Player 1"),
            Winner::Two => write!(f, "Player 2"),
            Winner::Split => write!(f, "Split"),
        }
    }
}

/// compare two showdown values into a table outcome
pub fn determine_winner(one: &Strength, two: &Strength) -> Winner {
    match one.cmp(two) {
        std::cmp::Ordering::Greater => Winner::One,
        std::cmp::Ordering::Less => Winner::Two,
        std::cmp::Ordering::Equal => Winner::Split,
    }
}
