//! Groestl-256 Kernels
//!
//! Constant tables and the portable permutation/compression primitives.

pub mod constants;
pub mod portable;
