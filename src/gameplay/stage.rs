/// the linear life cycle of a hand. stages only move forward.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    #[default]
    NotDealt = 0,
    PreFlop = 1,
    Flop = 2,
    Turn = 3,
    River = 4,
    Showdown = 5,
}

impl Stage {
    pub fn next(&self) -> Self {
        match self {
            Stage::NotDealt => Stage::PreFlop,
            Stage::PreFlop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River => Stage::Showdown,
            Stage::Showdown => Stage::Showdown,
        }
    }

    /// betting is only open between the deal and the showdown
    pub fn betting(&self) -> bool {
        matches!(
            self,
            Stage::PreFlop | Stage::Flop | Stage::Turn | Stage::River
        )
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Stage::NotDealt => "Not Dealt",
                Stage::PreFlop => "Pre-Flop",
                Stage::Flop => "Flop",
                Stage::Turn => "Turn",
                Stage::River => "River",
                Stage::Showdown => "Showdown",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_only() {
        let mut stage = Stage::NotDealt;
        for expected in [
            Stage::PreFlop,
            Stage::Flop,
            Stage::Turn,
            Stage::River,
            Stage::Showdown,
            Stage::Showdown,
        ] {
            stage = stage.next();
            assert_eq!(stage, expected);
        }
    }

    #[test]
    fn betting_window() {
        assert!(!Stage::NotDealt.betting());
        assert!(Stage::PreFlop.betting());
        assert!(Stage::River.betting());
        assert!(!Stage::Showdown.betting());
    }
}
