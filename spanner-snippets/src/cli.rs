use std::io::{self, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tokio::time::Instant;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spanner_snippets::{Config, Dispatcher, ExecContext, Registry, Result, SnippetsError};

const AFTER_HELP: &str = "\
Commands:
  createdatabase  Create the database with the Singers and Albums tables
  write           Upsert sample singers and albums with mutations
  dmlwrite        Insert sample singers with a DML statement
  query           Print every album

Examples:
  spanner-snippets createdatabase projects/my-project/instances/my-instance/databases/example-db
  spanner-snippets write projects/my-project/instances/my-instance/databases/example-db";

#[derive(Parser, Debug)]
#[command(name = "spanner-snippets", version)]
#[command(about = "Runnable Cloud Spanner snippets")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[arg(help = "Command to run")]
    pub command: String,

    #[arg(help = "Database name: projects/<project>/instances/<instance>/databases/<db>")]
    pub database: String,

    #[arg(long, help = "Config file to use instead of the global and project files")]
    pub config: Option<PathBuf>,
}

pub async fn run(cli: Cli, started: Instant) -> Result<()> {
    let dispatcher = Dispatcher::new(Registry::standard());
    if !dispatcher.registry().contains(&cli.command) {
        if let Err(e) = write_usage(&mut io::stderr(), dispatcher.registry(), &cli.command) {
            warn!(error = %e, "could not print usage");
        }
        return Err(SnippetsError::UnknownCommand(cli.command));
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .inspect_err(|e| eprintln!("spanner-snippets: {e}"))?;

    init_tracing(config.log_filter());

    let ctx = ExecContext::starting_at(started, config.timeout())
        .inspect_err(|e| eprintln!("spanner-snippets: {e}"))?;
    execute(&ctx, &dispatcher, &cli.command, &cli.database).await
}

#[cfg(feature = "spanner")]
async fn execute(
    ctx: &ExecContext,
    dispatcher: &Dispatcher,
    command: &str,
    database: &str,
) -> Result<()> {
    use spanner_snippets::adapters::SpannerClients;

    let clients = SpannerClients::connect(ctx, database)
        .await
        .inspect_err(|e| eprintln!("spanner-snippets: could not create clients: {e}"))?;

    let mut stdout = io::stdout();
    let result = dispatcher
        .run(ctx, &mut stdout, clients.clients(), command, database)
        .await;

    clients.close().await;
    result
}

#[cfg(not(feature = "spanner"))]
#[allow(clippy::unused_async)]
async fn execute(
    _ctx: &ExecContext,
    _dispatcher: &Dispatcher,
    _command: &str,
    _database: &str,
) -> Result<()> {
    let err = SnippetsError::Config(
        "built without Cloud Spanner support; rebuild with `--features spanner`".to_string(),
    );
    eprintln!("spanner-snippets: {err}");
    Err(err)
}

fn write_usage(out: &mut dyn Write, registry: &Registry, command: &str) -> io::Result<()> {
    writeln!(out, "spanner-snippets: unknown command `{command}`")?;
    writeln!(
        out,
        "Command can be one of: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    )?;
    writeln!(out)?;
    write!(out, "{}", Cli::command().render_help())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}
