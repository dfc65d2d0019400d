pub mod action;
pub use action::*;

pub mod engine;
pub use engine::*;

pub mod game;
pub use game::*;

pub mod seat;
pub use seat::*;

pub mod stage;
pub use stage::*;
