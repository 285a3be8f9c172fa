//! Subnet request and allocation record models.

use super::{block_size, NetworkBlock};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A named host-count requirement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRequest {
    /// Name of the subnet, not required to be unique.
    pub name: String,
    /// Hosts needed, excluding network and broadcast addresses.
    pub host_demand: u64,
}

impl SubnetRequest {
    pub fn new(name: &str, host_demand: u64) -> Self {
        SubnetRequest {
            name: name.to_string(),
            host_demand,
        }
    }
}

/// Parse `name=hosts`.
impl FromStr for SubnetRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, hosts) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected name=hosts, got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("Subnet name is empty in '{s}'"));
        }
        let host_demand = hosts
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid host count in '{s}': {e}"))?;
        Ok(SubnetRequest::new(name, host_demand))
    }
}

/// One carved block, as reported to front ends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocatedSubnet {
    pub name: String,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub prefix: u8,
    pub usable_host_count: i64,
}

impl AllocatedSubnet {
    pub fn from_block(name: &str, block: &NetworkBlock) -> Self {
        AllocatedSubnet {
            name: name.to_string(),
            network_address: block.base(),
            broadcast_address: block.broadcast(),
            mask: block.mask(),
            prefix: block.prefix(),
            usable_host_count: block.usable_host_count(),
        }
    }

    /// Number of addresses covered, reserved ones included.
    ///
    /// Zero for a prefix above 32.
    pub fn size(&self) -> u64 {
        block_size(self.prefix).unwrap_or(0)
    }
}

impl std::fmt::Display for AllocatedSubnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {}/{} mask {} broadcast {} ({} hosts)",
            self.name,
            self.network_address,
            self.prefix,
            self.mask,
            self.broadcast_address,
            self.usable_host_count
        )
    }
}

/// Order in which requests are carved out of the parent block.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Largest demand first.
    #[default]
    Desc,
    Asc,
    /// Keep the input order.
    #[serde(rename = "none")]
    InputOrder,
}

impl SortOrder {
    /// Lenient parse: anything unrecognised falls back to [`SortOrder::Desc`].
    pub fn from_text(text: &str) -> Self {
        text.parse().unwrap_or_default()
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "0" | "desc" | "descending" => Ok(SortOrder::Desc),
            "1" | "asc" | "ascending" => Ok(SortOrder::Asc),
            "2" | "none" | "input" => Ok(SortOrder::InputOrder),
            other => Err(format!("Unknown sort order '{other}'")),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
            SortOrder::InputOrder => "none",
        };
        write!(f, "{s}")
    }
}
