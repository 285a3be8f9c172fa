//! Error type for address, prefix and mask parsing.

use thiserror::Error;

/// Raised whenever textual or numeric input cannot be turned into a valid
/// IPv4 address, prefix length or subnet mask.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressFormatError {
    #[error("The specified net-address did not have the required format: '{0}'")]
    InvalidAddress(String),

    #[error("Prefix length must be between 0 and 32: '{0}'")]
    InvalidPrefix(String),

    #[error("The subnet mask bits are not contiguous: {0}")]
    NonContiguousMask(String),

    #[error("Integer address is too big: {0}")]
    AddressOutOfRange(u64),

    #[error("No IPv4 block can hold {0} hosts")]
    HostDemandTooLarge(u64),
}
