//! Injected randomness.
//!
//! The allocator never touches global random state. Callers pass a
//! [`RandomSource`], which lets tests replay fixed draws and production
//! code use any `rand` generator.
//!
//! # Sources
//!
//! - [`RngSource`]: adapts a `rand::Rng` (seeded `SmallRng` or `ThreadRng`)
//! - [`LowerBound`]: always draws the lower bound (deterministic oracle)
//! - [`ScriptedSource`]: replays a fixed sequence of values
//! - any `FnMut(usize, usize) -> usize` closure

mod shuffle;
mod source;

pub use shuffle::{shuffle, shuffle_in_place};
pub use source::{LowerBound, RandomSource, RngSource, ScriptedSource};
