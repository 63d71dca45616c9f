//! CLI argument definitions using clap
//!
//! Commands:
//! - realtydash serve [--config <path>]
//! - realtydash query [--config <path>] [--filter-by F --filter-value V] [--sort-by F --sort-order asc|desc] [--page N --limit N]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::table::TableQueryParams;

/// Real-estate dashboard API
#[derive(Parser, Debug)]
#[command(name = "realtydash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run one table query against the configured data and print the page
    Query {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        table: TableArgs,
    },
}

/// Table query parameters, mirroring the `/api/data/table` query string
#[derive(Args, Debug, Default, Clone)]
pub struct TableArgs {
    /// Field to filter on
    #[arg(long)]
    pub filter_by: Option<String>,

    /// Case-insensitive substring to match
    #[arg(long)]
    pub filter_value: Option<String>,

    /// Field to sort on
    #[arg(long)]
    pub sort_by: Option<String>,

    /// asc or desc
    #[arg(long)]
    pub sort_order: Option<String>,

    /// 1-based page number
    #[arg(long)]
    pub page: Option<String>,

    /// Page size
    #[arg(long)]
    pub limit: Option<String>,
}

impl From<TableArgs> for TableQueryParams {
    fn from(args: TableArgs) -> Self {
        TableQueryParams {
            filter_by: args.filter_by,
            filter_value: args.filter_value,
            sort_by: args.sort_by,
            sort_order: args.sort_order,
            page: args.page,
            limit: args.limit,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
