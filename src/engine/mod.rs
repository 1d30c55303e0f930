//! Iteration engine: runs the installed rules over the active range.

pub mod iteration;

pub use iteration::{evaluate, run, Iteration, IterationReport, RenderedLine};
