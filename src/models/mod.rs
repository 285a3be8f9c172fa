//! Domain models for VLSM allocation.
//!
//! This module contains the core value types:
//! - [`ipv4`] - address, prefix and mask codec
//! - [`NetworkBlock`] - base address plus prefix length
//! - [`SubnetRequest`] and [`AllocatedSubnet`] - allocator input and output

mod block;
mod ipv4;
mod subnet;

// Re-export public types
pub use block::{minimum_prefix_for, NetworkBlock};
pub use ipv4::{
    block_size, broadcast_addr, format_address, from_integer, get_cidr_mask, is_aligned,
    mask_from_prefix, parse_address, prefix_from_mask, prefix_from_mask_or_address, snap_forward,
    to_integer, MAX_LENGTH,
};
pub use subnet::{AllocatedSubnet, SortOrder, SubnetRequest};
