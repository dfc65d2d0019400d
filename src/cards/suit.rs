#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
///
/// a Suit claims every 4th bit of a card bitstring
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1111111111111 << u8::from(s)
    }
}

/// str isomorphism
impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        match s {
            "c" => Suit::Club,
            "d" => Suit::Diamond,
            "h" => Suit::Heart,
            "s" => Suit::Spade,
            _ => panic!("Invalid suit str: {}", s),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}
