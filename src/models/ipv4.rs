//! IPv4 address, prefix length and subnet mask codec.
//!
//! Pure conversions between dotted-quad text, prefix lengths, masks and
//! 32-bit integers, along with the bit arithmetic used for block boundaries.

use crate::error::AddressFormatError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref ADDRESS_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
    static ref PREFIX_RE: Regex = Regex::new(r"^([0-9]|[0-2][0-9]|3[0-2])$").expect("Invalid Regex?");
}

/// Parse a dotted-quad string into an [`Ipv4Addr`].
///
/// Exactly four groups of 1-3 decimal digits, each in `0..=255`.
///
/// # Examples
/// ```
/// use vlsm_calc::models::parse_address;
/// use std::net::Ipv4Addr;
/// assert_eq!(parse_address("192.168.0.1").unwrap(), Ipv4Addr::new(192, 168, 0, 1));
/// assert!(parse_address("192.168.0.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, AddressFormatError> {
    let caps = ADDRESS_RE
        .captures(text)
        .ok_or_else(|| AddressFormatError::InvalidAddress(text.to_string()))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1]
            .parse::<u8>()
            .map_err(|_| AddressFormatError::InvalidAddress(text.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Canonical dotted-quad text, no leading zeros.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<String>>()
        .join(".")
}

/// Interpret `text` either as a bare prefix length or as a dotted subnet mask.
///
/// A one or two digit number in `0..=32` always wins over the address
/// interpretation.
///
/// # Examples
/// ```
/// use vlsm_calc::models::prefix_from_mask_or_address;
/// assert_eq!(prefix_from_mask_or_address("24").unwrap(), 24);
/// assert_eq!(prefix_from_mask_or_address("255.255.255.224").unwrap(), 27);
/// assert!(prefix_from_mask_or_address("33").is_err());
/// ```
pub fn prefix_from_mask_or_address(text: &str) -> Result<u8, AddressFormatError> {
    if PREFIX_RE.is_match(text) {
        return text
            .parse::<u8>()
            .map_err(|_| AddressFormatError::InvalidPrefix(text.to_string()));
    }

    let mask = parse_address(text).map_err(|_| {
        if text.contains('.') {
            AddressFormatError::InvalidAddress(text.to_string())
        } else {
            AddressFormatError::InvalidPrefix(text.to_string())
        }
    })?;
    prefix_from_mask(mask)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, AddressFormatError> {
    if len > MAX_LENGTH {
        Err(AddressFormatError::InvalidPrefix(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Prefix length expanded to a dotted subnet mask.
pub fn mask_from_prefix(len: u8) -> Result<Ipv4Addr, AddressFormatError> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Count the leading one-bits of a subnet mask.
///
/// Fails if any zero bit is followed by a one bit.
pub fn prefix_from_mask(mask: Ipv4Addr) -> Result<u8, AddressFormatError> {
    let inverted = !u32::from(mask);
    // host part must be 2^k - 1
    if inverted & inverted.wrapping_add(1) != 0 {
        return Err(AddressFormatError::NonContiguousMask(format_address(mask)));
    }
    Ok(u32::from(mask).leading_ones() as u8)
}

pub fn to_integer(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Inverse of [`to_integer`]; fails for values that do not fit in 32 bits.
pub fn from_integer(value: u64) -> Result<Ipv4Addr, AddressFormatError> {
    u32::try_from(value)
        .map(Ipv4Addr::from)
        .map_err(|_| AddressFormatError::AddressOutOfRange(value))
}

/// Number of addresses in a block with the given prefix length.
pub fn block_size(len: u8) -> Result<u64, AddressFormatError> {
    if len > MAX_LENGTH {
        return Err(AddressFormatError::InvalidPrefix(len.to_string()));
    }
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Calculate the broadcast address for a given IP and prefix length.
///
/// The address is used as given, no network cut is applied first.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressFormatError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) | !mask))
}

/// True when the host bits of `addr` are all zero for prefix `len`.
pub fn is_aligned(addr: Ipv4Addr, len: u8) -> Result<bool, AddressFormatError> {
    let mask = get_cidr_mask(len)?;
    Ok(u32::from(addr) & !mask == 0)
}

/// Move a misaligned address forward to the start of the next block of
/// prefix `len`. Aligned addresses are returned unchanged.
///
/// # Examples
/// ```
/// use vlsm_calc::models::snap_forward;
/// use std::net::Ipv4Addr;
/// assert_eq!(
///     snap_forward(Ipv4Addr::new(192, 168, 0, 5), 24).unwrap(),
///     Ipv4Addr::new(192, 168, 1, 0)
/// );
/// ```
pub fn snap_forward(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, AddressFormatError> {
    if is_aligned(addr, len)? {
        return Ok(addr);
    }
    let host_bits = MAX_LENGTH - len;
    let bits = u32::from(addr) as u64;
    from_integer(((bits >> host_bits) + 1) << host_bits)
}
