// cargo watch -x 'fmt' -x 'test'

//! VLSM subnet calculator.
//!
//! Parse a parent IPv4 network, then carve aligned, minimum-sufficient
//! blocks out of it for a list of named host demands.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::AddressFormatError;
pub use models::{AllocatedSubnet, NetworkBlock, SortOrder, SubnetRequest};
pub use processing::{calculate_subnets, Allocation};

/// Parse/validate entry point: address text plus prefix-or-mask text.
pub fn parse_network(address: &str, mask_or_prefix: &str) -> Result<NetworkBlock, AddressFormatError> {
    NetworkBlock::parse(address, mask_or_prefix, false)
}
