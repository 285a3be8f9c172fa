//! Network block: a base address combined with a prefix length.

use super::ipv4::{
    block_size, format_address, from_integer, parse_address, prefix_from_mask_or_address,
    snap_forward, MAX_LENGTH,
};
use crate::error::AddressFormatError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// IPv4 network block.
///
/// Mask, broadcast and host count are always derived from `base` and
/// `prefix`, never stored.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    base: Ipv4Addr,
    prefix: u8,
}

impl NetworkBlock {
    /// Build a block from an already parsed address and prefix.
    ///
    /// With `snap_to_boundary` a misaligned `base` is moved forward to the
    /// start of the next aligned block of this size. Without it the address
    /// is kept verbatim.
    pub fn new(base: Ipv4Addr, prefix: u8, snap_to_boundary: bool) -> Result<Self, AddressFormatError> {
        if prefix > MAX_LENGTH {
            return Err(AddressFormatError::InvalidPrefix(prefix.to_string()));
        }
        let base = if snap_to_boundary {
            snap_forward(base, prefix)?
        } else {
            base
        };
        Ok(NetworkBlock { base, prefix })
    }

    /// Parse an address and a prefix-or-mask string into a block.
    ///
    /// # Examples
    /// ```
    /// use vlsm_calc::models::NetworkBlock;
    /// let block = NetworkBlock::parse("192.168.0.0", "255.255.255.0", false).unwrap();
    /// assert_eq!(block.prefix(), 24);
    /// assert_eq!(block.broadcast().to_string(), "192.168.0.255");
    /// ```
    pub fn parse(
        address: &str,
        mask_or_prefix: &str,
        snap_to_boundary: bool,
    ) -> Result<Self, AddressFormatError> {
        let prefix = prefix_from_mask_or_address(mask_or_prefix)?;
        let base = parse_address(address)?;
        NetworkBlock::new(base, prefix, snap_to_boundary)
    }

    pub fn base(&self) -> Ipv4Addr {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> Ipv4Addr {
        // shifting by 32 (prefix 0) leaves no network bits
        let host_bits = (MAX_LENGTH - self.prefix) as u32;
        Ipv4Addr::from(u32::MAX.checked_shl(host_bits).unwrap_or(0))
    }

    /// Highest address of the block: base OR NOT mask.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.base) | !u32::from(self.mask()))
    }

    /// Number of addresses spanned by the block.
    pub fn size(&self) -> u64 {
        block_size(self.prefix).unwrap_or(0)
    }

    /// Address following the broadcast address.
    ///
    /// Fails past 255.255.255.255.
    pub fn next_block_address(&self) -> Result<Ipv4Addr, AddressFormatError> {
        from_integer(u32::from(self.broadcast()) as u64 + 1)
    }

    /// 2^(32 - prefix) - 2. Zero or negative means no usable host.
    pub fn usable_host_count(&self) -> i64 {
        self.size() as i64 - 2
    }

    /// Long form: network, mask and broadcast.
    pub fn describe(&self) -> String {
        format!(
            "Network: {}, Mask: {}, Broadcast: {}",
            format_address(self.base),
            format_address(self.mask()),
            format_address(self.broadcast())
        )
    }
}

/// Smallest prefix whose block holds `host_demand` plus network and broadcast.
///
/// Never narrower than /30. Fails when even a /0 is too small.
pub fn minimum_prefix_for(host_demand: u64) -> Result<u8, AddressFormatError> {
    let needed = host_demand.saturating_add(2);
    if needed > block_size(0)? {
        return Err(AddressFormatError::HostDemandTooLarge(host_demand));
    }
    let mut prefix = MAX_LENGTH - 2;
    while needed > block_size(prefix)? {
        prefix -= 1;
    }
    Ok(prefix)
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let block = NetworkBlock::parse("10.0.0.0", "8", false).unwrap();
        assert_eq!(block.base(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(block.prefix(), 8);
        assert_eq!(block.mask(), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(block.broadcast(), Ipv4Addr::new(10, 255, 255, 255));
        assert_eq!(block.to_string(), "10.0.0.0/8");
        assert!(NetworkBlock::parse("10.0.0", "8", false).is_err());
        assert!(NetworkBlock::parse("10.0.0.0", "255.0.255.0", false).is_err());
        assert!(NetworkBlock::new(Ipv4Addr::new(10, 0, 0, 0), 33, false).is_err());
    }

    #[test]
    fn test_snap_to_boundary() {
        let block = NetworkBlock::parse("192.168.0.5", "24", true).unwrap();
        assert_eq!(block.base(), Ipv4Addr::new(192, 168, 1, 0));

        let block = NetworkBlock::parse("192.168.0.0", "24", true).unwrap();
        assert_eq!(block.base(), Ipv4Addr::new(192, 168, 0, 0));

        let block = NetworkBlock::parse("192.168.0.5", "24", false).unwrap();
        assert_eq!(block.base(), Ipv4Addr::new(192, 168, 0, 5));
        assert_eq!(block.broadcast(), Ipv4Addr::new(192, 168, 0, 255));

        assert!(NetworkBlock::parse("255.255.255.5", "24", true).is_err());
    }

    #[test]
    fn test_next_block_address() {
        let block = NetworkBlock::parse("192.168.0.32", "27", false).unwrap();
        assert_eq!(block.next_block_address().unwrap(), Ipv4Addr::new(192, 168, 0, 64));

        let last = NetworkBlock::parse("255.255.255.0", "24", false).unwrap();
        assert_eq!(
            last.next_block_address(),
            Err(AddressFormatError::AddressOutOfRange(1 << 32))
        );
    }

    #[test]
    fn test_usable_host_count() {
        let host = |p: u8| NetworkBlock::new(Ipv4Addr::UNSPECIFIED, p, false).unwrap().usable_host_count();
        assert_eq!(host(0), 4294967294);
        assert_eq!(host(24), 254);
        assert_eq!(host(27), 30);
        assert_eq!(host(30), 2);
        assert_eq!(host(31), 0);
        assert_eq!(host(32), -1);
    }

    #[test]
    fn test_minimum_prefix_for() {
        assert_eq!(minimum_prefix_for(0).unwrap(), 30);
        assert_eq!(minimum_prefix_for(1).unwrap(), 30);
        assert_eq!(minimum_prefix_for(2).unwrap(), 30);
        assert_eq!(minimum_prefix_for(3).unwrap(), 29);
        assert_eq!(minimum_prefix_for(6).unwrap(), 29);
        assert_eq!(minimum_prefix_for(29).unwrap(), 27);
        assert_eq!(minimum_prefix_for(30).unwrap(), 27);
        assert_eq!(minimum_prefix_for(31).unwrap(), 26);
        assert_eq!(minimum_prefix_for(254).unwrap(), 24);
        assert_eq!(minimum_prefix_for(255).unwrap(), 23);
        assert_eq!(minimum_prefix_for(u32::MAX as u64 - 1).unwrap(), 0);
        assert_eq!(
            minimum_prefix_for(u32::MAX as u64),
            Err(AddressFormatError::HostDemandTooLarge(u32::MAX as u64))
        );
        assert!(minimum_prefix_for(u64::MAX).is_err());
    }

    #[test]
    fn test_mask_and_broadcast_edges() {
        let all = NetworkBlock::new(Ipv4Addr::UNSPECIFIED, 0, false).unwrap();
        assert_eq!(all.mask(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(all.broadcast(), Ipv4Addr::BROADCAST);
        assert_eq!(all.size(), 1 << 32);

        let host = NetworkBlock::new(Ipv4Addr::new(10, 1, 2, 3), 32, false).unwrap();
        assert_eq!(host.mask(), Ipv4Addr::BROADCAST);
        assert_eq!(host.broadcast(), Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(host.size(), 1);
    }

    #[test]
    fn test_serialize() {
        let block = NetworkBlock::parse("10.1.1.0", "28", false).unwrap();
        assert_eq!(serde_json::to_string(&block).unwrap(), r#""10.1.1.0/28""#);
    }

    #[test]
    fn test_describe() {
        let block = NetworkBlock::parse("192.168.0.64", "27", false).unwrap();
        assert_eq!(
            block.describe(),
            "Network: 192.168.0.64, Mask: 255.255.255.224, Broadcast: 192.168.0.95"
        );
    }
}
