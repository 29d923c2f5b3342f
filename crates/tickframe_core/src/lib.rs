//! # Tickframe Core
//!
//! Foundational types shared by the Tickframe crates:
//!
//! - [`errors`]: the crate-wide [`TickframeError`] and [`Result`] alias
//! - [`random`]: the injectable [`RandomSource`] trait and its implementations

pub mod errors;
pub mod random;

pub use errors::{Result, TickframeError};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
