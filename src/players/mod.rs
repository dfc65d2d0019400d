pub mod check;
pub use check::*;

pub mod equity;
pub use equity::*;

pub mod human;
pub use human::*;

pub mod naive;
pub use naive::*;

pub mod player;
pub use player::*;

pub mod terminal;
pub use terminal::*;

pub mod testing;
pub use testing::*;

pub mod tree;
pub use tree::*;
