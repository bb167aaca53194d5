use clap::Parser;
use tracing::debug;
use zonectl_domain::CliOverrides;

mod bootstrap;
mod commands;
mod dry_run;

use commands::Command;

#[derive(Parser)]
#[command(name = "zonectl")]
#[command(version)]
#[command(about = "Record content codec and RRSet builder for a DNS management API")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Management API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_ttl = match &cli.command {
        Command::Build(args) => args.ttl,
        _ => None,
    };
    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        base_url: cli.base_url.clone(),
        default_ttl,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging)?;

    debug!(
        base_url = %config.api.base_url,
        default_ttl = config.records.default_ttl,
        "Configuration loaded"
    );

    match cli.command {
        Command::Decode(args) => commands::decode::run(args),
        Command::Render(args) => commands::render::run(args),
        Command::Build(args) => commands::build::run(args, &config).await,
    }
}
