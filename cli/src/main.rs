//! Gearfinder CLI binary: search for gear from the command line or run the relay
//! server.
//!
//! Subcommands: `serve` (HTTP relay), `activities` (tile catalog). Default mode is
//! search: one-shot with a query, or `-i` for the interactive REPL. Searches go to
//! a running server by default; `--local` runs the relay in-process.

mod repl;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use cli::{LocalBackend, RemoteBackend, SearchBackend};
use gearfinder::{RecentSearches, SearchUi, ViewState};

#[derive(Parser, Debug)]
#[command(name = "gearfinder")]
#[command(about = "Gearfinder: find the right gear for an activity")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Search query (or pass as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    query: Option<String>,

    /// Positional args: search query when -q/--query is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Interactive REPL: activity tiles, recent searches, repeated queries
    #[arg(short, long)]
    interactive: bool,

    /// Run the relay in-process instead of calling a server
    #[arg(long)]
    local: bool,

    /// Server URL (default: http://127.0.0.1:8080 or GEARFINDER_REMOTE_URL)
    #[arg(long, value_name = "URL")]
    remote: Option<String>,

    /// Print the raw response envelope as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the relay HTTP server
    Serve(ServeArgs),
    /// List the activity tiles
    Activities,
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Bind address (default: 127.0.0.1:8080 or GEARFINDER_ADDR)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn resolve_backend(args: &Args) -> Arc<dyn SearchBackend> {
    if args.local {
        return Arc::new(LocalBackend::from_env());
    }
    match &args.remote {
        Some(url) => Arc::new(RemoteBackend::new(url)),
        None => Arc::new(RemoteBackend::from_env()),
    }
}

/// `-q/--query` wins; otherwise the positional words joined with spaces.
fn resolve_query(query: Option<String>, rest: &[String]) -> Option<String> {
    query.or_else(|| {
        if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("gearfinder", None) {
        eprintln!("config: {e}");
    }
    init_tracing();

    let args = Args::parse();

    match &args.cmd {
        Some(Command::Serve(serve_args)) => {
            serve::run_serve(serve_args.addr.as_deref(), false)
                .await
                .map_err(|e| -> Box<dyn std::error::Error> { e })?;
            return Ok(());
        }
        Some(Command::Activities) => {
            repl::print_activities();
            return Ok(());
        }
        None => {}
    }

    let backend = resolve_backend(&args);
    let query = resolve_query(args.query.clone(), &args.rest);

    match query {
        Some(query) if !args.interactive => {
            // One-shot: a single search turn through the same reducer path as the REPL.
            let mut ui = SearchUi::new();
            let mut recent = RecentSearches::new();
            repl::run_one_search(backend.as_ref(), &mut ui, &mut recent, &query, args.json).await;
            if let ViewState::Idle {
                last_error: Some(error),
            } = ui.state()
            {
                return Err(error.clone().into());
            }
        }
        query => repl::run_repl_loop(backend.as_ref(), query, args.json).await?,
    }
    Ok(())
}
