//! BankEase main entry point

use anyhow::Context;
use bankease_api::start_server;
use bankease_config::Config;
use bankease_core::{LoggingDelegate, Session};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "bankease")]
#[command(author = "BankEase Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight, server-rendered consumer banking prototype", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_details());
            return Err(e).with_context(|| format!("Failed to load {}", args.config.display()));
        }
    };

    let env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    env_logger::Builder::from_env(env).init();
    if args.config.exists() {
        log::info!("Config loaded from {}", args.config.display());
    } else {
        log::warn!("Config file {} not found, using defaults", args.config.display());
    }

    let session = Session::new(&config).with_delegate(Arc::new(LoggingDelegate));
    log::info!(
        "Navigation policy: {:?}, onboarding cleared on logout: {}",
        session.policy(),
        config.session.clear_onboarding_on_logout
    );

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, session))
}
