//! VLSM allocation.
//!
//! Carves consecutive, aligned, minimum-sufficient blocks out of a parent
//! network for a list of named host demands.

use crate::error::AddressFormatError;
use crate::models::{
    from_integer, minimum_prefix_for, AllocatedSubnet, NetworkBlock, SortOrder, SubnetRequest,
};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// Result of one allocation run.
#[derive(Serialize, Debug, Clone)]
pub struct Allocation {
    /// The block the requests were carved from.
    pub parent: NetworkBlock,
    /// Order the requests were carved in.
    pub sort_order: SortOrder,
    /// One record per request, ordered by network address.
    pub subnets: Vec<AllocatedSubnet>,
    /// True when the last block ends past the parent's broadcast address.
    pub overflow: bool,
}

impl Allocation {
    /// Broadcast address of the highest allocated block.
    pub fn last_broadcast(&self) -> Option<Ipv4Addr> {
        self.subnets.last().map(|s| s.broadcast_address)
    }

    /// Parent addresses left over after all blocks are taken.
    ///
    /// Negative when the blocks need more room than the parent has.
    pub fn unassigned_addresses(&self) -> i64 {
        let used: u64 = self.subnets.iter().map(|s| s.size()).sum();
        self.parent.size() as i64 - used as i64
    }

    /// Records ordered by prefix length, largest blocks first.
    pub fn by_prefix(&self) -> Vec<&AllocatedSubnet> {
        self.subnets.iter().sorted_by_key(|s| s.prefix).collect()
    }
}

/// Allocate a block for every request inside `parent`.
///
/// Requests are carved in `sort_order`; the returned records are always
/// ordered by network address. Running past the parent block is reported
/// through [`Allocation::overflow`].
///
/// Inputs are already parsed, so the only errors left are the limits of the
/// IPv4 space itself: a demand no block can hold
/// ([`AddressFormatError::HostDemandTooLarge`]) and carving past
/// 255.255.255.255 ([`AddressFormatError::AddressOutOfRange`]).
///
/// # Arguments
/// * `parent` - The network to carve from
/// * `requests` - Named host demands
/// * `sort_order` - Allocation order of the requests
pub fn calculate_subnets(
    parent: &NetworkBlock,
    requests: &[SubnetRequest],
    sort_order: SortOrder,
) -> Result<Allocation, AddressFormatError> {
    log::info!(
        "#Start calculate_subnets() parent {} with {} requests, sort {}",
        parent,
        requests.len(),
        sort_order
    );

    let ordered: Vec<&SubnetRequest> = match sort_order {
        SortOrder::Desc => requests
            .iter()
            .sorted_by_key(|r| Reverse(r.host_demand))
            .collect(),
        SortOrder::Asc => requests.iter().sorted_by_key(|r| r.host_demand).collect(),
        SortOrder::InputOrder => requests.iter().collect(),
    };

    let mut cursor = u32::from(parent.base()) as u64;
    let mut subnets = Vec::with_capacity(requests.len());

    for request in ordered {
        let prefix = minimum_prefix_for(request.host_demand)?;
        let block = NetworkBlock::new(from_integer(cursor)?, prefix, true)?;
        log::debug!(
            "{name}: {hosts} hosts -> {block}",
            name = request.name,
            hosts = request.host_demand
        );

        subnets.push(AllocatedSubnet::from_block(&request.name, &block));
        cursor = u32::from(block.broadcast()) as u64 + 1;
    }

    subnets.sort_by_key(|s| s.network_address);

    let overflow = subnets
        .last()
        .is_some_and(|s| s.broadcast_address > parent.broadcast());
    if overflow {
        log::warn!("Subnets do not fit into parent network {}", parent);
    }

    Ok(Allocation {
        parent: *parent,
        sort_order,
        subnets,
        overflow,
    })
}
