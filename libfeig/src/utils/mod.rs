//! Small helpers shared across the crate: hex formatting for frame dumps and
//! timeout conversions.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
