//! Simulation driver and program loading.
//!
//! Provides the loader that places instruction words in memory and the
//! simulator that runs the fetch/decode/execute/writeback loop over them.

pub mod loader;

pub mod simulator;

pub use simulator::{RunState, Simulator, Step};
