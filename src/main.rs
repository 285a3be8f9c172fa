use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;
use vlsm_calc::cli::{run, Cli};
use vlsm_calc::config::Config;

fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.merge(&Config::from_env());
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let allocation = run(&cli, &config)?;
    log::info!(
        "#End main() {} subnets, overflow={}",
        allocation.subnets.len(),
        allocation.overflow
    );

    Ok(())
}
