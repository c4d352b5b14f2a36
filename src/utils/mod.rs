//! Utility modules for quick view placement
//!
//! Small numeric helpers shared by the placement calculators.

pub mod clamp;

// Re-export commonly used functions
pub use clamp::*;
