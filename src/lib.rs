#![doc = include_str!("../README.md")]

mod bptree;
mod slots;

pub mod map;
pub mod seq;
pub mod set;

#[cfg(feature = "proptest")]
pub mod strategies;

pub use map::MapTree;
pub use seq::SeqTree;
pub use set::SetTree;
