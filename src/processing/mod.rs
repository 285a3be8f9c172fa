//! Subnet allocation logic.
//!
//! - [`allocator`] - VLSM carving of a parent block

mod allocator;

// Re-export public functions
pub use allocator::{calculate_subnets, Allocation};
