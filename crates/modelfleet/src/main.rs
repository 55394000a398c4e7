mod commands;
mod prompt;

use clap::{Parser, Subcommand};
use colored::Colorize;
use modelfleet_platform::{RemovalPolicy, ScanOptions};
use modelfleet_vertex::{VertexClient, VertexTimeouts};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mfleet")]
#[command(about = "Manage model deployments across serving regions", long_about = None)]
#[command(version)]
struct Cli {
    /// Cloud project ID (prompted interactively when omitted)
    #[arg(short, long, global = true, env = "MFLEET_PROJECT")]
    project: Option<String>,

    /// Maximum number of concurrent region probes
    #[arg(long, global = true, default_value_t = 20)]
    concurrency: usize,

    /// Per-region probe timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    probe_timeout: u64,

    /// Bounded wait for undeploy/delete operations in seconds
    #[arg(long, global = true, default_value_t = 300)]
    operation_timeout: u64,

    /// Delay between a successful undeploy and the delete attempt, in seconds
    #[arg(long, global = true, default_value_t = 30)]
    settle_delay: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full interactive workflow: discover regions, pick a deployed
    /// model, undeploy it and optionally delete the model artifact
    Sweep,
    /// Scan all serving regions and rank them by endpoint count
    Regions,
    /// List endpoints and deployed models in one region
    Endpoints {
        /// Region code, e.g. us-central1
        region: String,
    },
}

/// Build the client timing policy from the CLI flags. The per-request
/// HTTP timeout follows the probe timeout so that raising
/// `--probe-timeout` actually lets slow listing calls finish instead
/// of the HTTP client cutting them off first.
fn vertex_timeouts(cli: &Cli) -> VertexTimeouts {
    let defaults = VertexTimeouts::default();
    VertexTimeouts {
        request_timeout: Duration::from_secs(cli.probe_timeout).max(defaults.request_timeout),
        operation_timeout: Duration::from_secs(cli.operation_timeout),
        ..defaults
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let project = match cli.project.clone() {
        Some(project) => project,
        None => prompt::prompt_line("Project ID: ")?,
    };

    let timeouts = vertex_timeouts(&cli);
    let scan = ScanOptions {
        concurrency: cli.concurrency,
        probe_timeout: Duration::from_secs(cli.probe_timeout),
    };
    let policy = RemovalPolicy {
        settle_delay: Duration::from_secs(cli.settle_delay),
    };

    let client = match VertexClient::connect(project, timeouts).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Sweep) {
        Commands::Sweep => commands::sweep::handle(&client, &scan, &policy).await?,
        Commands::Regions => commands::regions::handle(&client, &scan).await?,
        Commands::Endpoints { region } => commands::endpoints::handle(&client, &region).await?,
    }

    Ok(())
}
