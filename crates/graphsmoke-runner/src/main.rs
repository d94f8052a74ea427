//! CLI entry point for the graphsmoke smoke-test driver.
//!
//! Response bodies are the payload and go to stdout; all diagnostics go
//! to stderr so the output stays pipeable.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use graphsmoke_client::GraphClient;

use graphsmoke_runner::config::{load_graph_config, load_runner_config};
use graphsmoke_runner::runner::{run_sequence, smoke_steps};
use graphsmoke_runner::seed::run_seed;

#[derive(Parser)]
#[command(name = "graphsmoke")]
#[command(about = "Smoke tests for the Neo4j transactional HTTP endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the endpoint base URI (e.g., http://localhost:7474).
    #[arg(long, global = true)]
    uri: Option<String>,

    /// Override the target database name.
    #[arg(long, global = true)]
    database: Option<String>,

    /// Config file prefix (default: graphsmoke).
    #[arg(short, long, default_value = "graphsmoke", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run the create → read → delete smoke cycle.
    Smoke {
        /// Abort at the first failed step instead of running the rest.
        #[arg(long)]
        fail_fast: bool,

        /// Request update counters with every statement.
        #[arg(long)]
        stats: bool,
    },
    /// Seed the demo social graph (three users, three FOLLOWS edges).
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut graph_config = load_graph_config(&cli.config);
    if let Some(uri) = &cli.uri {
        graph_config.uri = uri.clone();
    }
    if let Some(database) = &cli.database {
        graph_config.database = database.clone();
    }

    let client = GraphClient::new(&graph_config)?;

    match cli.command {
        Command::Smoke { fail_fast, stats } => {
            let runner_config = load_runner_config(&cli.config)?;
            let fail_fast = fail_fast || runner_config.fail_fast;
            let include_stats = stats || runner_config.include_stats;

            let steps = smoke_steps(include_stats);
            let mut out = std::io::stdout().lock();
            let report = run_sequence(&client, steps, fail_fast, &mut out).await?;

            if report.failed > 0 {
                anyhow::bail!("{} of {} steps failed", report.failed, report.total);
            }
            tracing::info!(steps = report.total, "Smoke cycle complete");
        }
        Command::Seed => {
            let summary = run_seed(&client).await?;
            tracing::info!(
                users = summary.users_created,
                follows = summary.follows_created,
                "Seed complete"
            );
        }
    }

    Ok(())
}
