//! CLI structure and argument parsing

use crate::config::{Config, OutputFormat};
use crate::models::{NetworkBlock, SortOrder, SubnetRequest};
use crate::output::{print_csv, print_json, print_table};
use crate::processing::{calculate_subnets, Allocation};
use clap::Parser;
use std::error::Error;

/// VLSM calculator - carve named subnets out of a parent IPv4 network
#[derive(Debug, Parser)]
#[command(name = "vlsm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Parent network address, e.g. 192.168.0.0
    #[arg(short, long)]
    pub network: String,

    /// Prefix length (24) or dotted subnet mask (255.255.255.0)
    #[arg(short, long)]
    pub mask: String,

    /// Subnet request as NAME=HOSTS, repeat for every subnet
    #[arg(short = 's', long = "subnet", value_name = "NAME=HOSTS")]
    pub subnets: Vec<SubnetRequest>,

    /// Allocation order: desc, asc or none [env: VLSM_SORT]
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Output format: table, csv or json [env: VLSM_FORMAT]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Command line flags win over configured defaults.
    pub fn merge(&self, config: &Config) -> Config {
        Config {
            sort_order: self.sort.unwrap_or(config.sort_order),
            format: self.format.unwrap_or(config.format),
            log_config: config.log_config.clone(),
        }
    }

    /// Parse the parent network and run the allocator.
    pub fn allocate(&self, config: &Config) -> Result<Allocation, Box<dyn Error>> {
        let parent = NetworkBlock::parse(self.network.trim(), self.mask.trim(), false)?;
        log::info!("Parent network {} ({})", parent, parent.describe());
        let allocation = calculate_subnets(&parent, &self.subnets, config.sort_order)?;
        Ok(allocation)
    }
}

/// Allocate and render according to `config`.
pub fn run(cli: &Cli, config: &Config) -> Result<Allocation, Box<dyn Error>> {
    let allocation = cli.allocate(config)?;
    match config.format {
        OutputFormat::Table => print_table(&allocation),
        OutputFormat::Csv => print_csv(&allocation),
        OutputFormat::Json => print_json(&allocation)?,
    }
    Ok(allocation)
}
