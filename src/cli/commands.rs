//! CLI command implementations

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::controller::LocalBackend;
use crate::http_server::HttpServer;
use crate::store;
use crate::table::{QueryProcessor, ResultPage, TableQueryParams, TableSchema};

use super::args::{Cli, Command, TableArgs};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(config.as_deref()),
        Command::Query { config, table } => {
            let page = query(config.as_deref(), table)?;
            write_json(&page)
        }
    }
}

/// Install the `fmt` subscriber; `RUST_LOG` overrides the `info` default
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP API server and block until shutdown
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    init_tracing();

    let config = AppConfig::load(config_path)?;
    let server = HttpServer::from_config(&config)?;

    info!(
        addr = %server.socket_addr(),
        data_file = ?config.data_file,
        "Starting realtydash"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one table query against the configured data
pub fn query(config_path: Option<&Path>, args: TableArgs) -> CliResult<ResultPage> {
    let config = AppConfig::load(config_path)?;
    let limits = config.page_limits();

    let table_query = TableQueryParams::from(args).into_query(&limits)?;
    let backend = LocalBackend::new(
        store::open(config.data_file.as_deref())?,
        QueryProcessor::with_limits(TableSchema::property_listings(), limits),
    );

    Ok(backend.query(&table_query)?)
}
