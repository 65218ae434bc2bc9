//! Execution Engine
//!
//! Block absorption, padding/finalization and batch processing.

pub mod absorber;
pub mod finalizer;
pub mod parallel;

pub use absorber::BlockAbsorber;
