pub mod classifier;
pub use classifier::*;

pub mod codec;
pub use codec::*;

pub mod tag;
pub use tag::*;

pub mod tags;
pub use tags::*;

pub mod tree;
pub use tree::*;
