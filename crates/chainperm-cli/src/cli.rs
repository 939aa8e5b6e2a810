//! CLI argument definitions for chainperm.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--username` | `$RDP_USERNAME` | Platform username (required) |
//! | `--password` | `$RDP_PASSWORD` | Platform password (required) |
//! | `--clientid` | `$RDP_APP_KEY` | Application key / client id (required) |
//! | `--chainric` | `.AV.O` | Chain to expand |
//! | `--limit` | `10` | Number of constituents to resolve |
//! | `--debug` | `false` | Debug-level logging |
//! | `--format` | `table` | Output format (table, json) |
//! | `--timeout-ms` | `30000` | Per-request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! chainperm --username $RDP_USERNAME --password $RDP_PASSWORD --clientid $RDP_APP_KEY
//! chainperm --chainric 0#.SETI --limit 5 --format json
//! ```

use clap::{Parser, ValueEnum};

use chainperm_core::pipeline::{DEFAULT_CHAIN, DEFAULT_LIMIT};

/// Expand an instrument chain and resolve its constituents to PermIDs.
#[derive(Debug, Parser)]
#[command(
    name = "chainperm",
    author,
    version,
    about = "Expand a chain RIC and resolve its constituents to organization PermIDs",
    long_about = "chainperm logs in to the RDP REST platform, expands a chain RIC into its \
constituents, resolves the first --limit constituents to organization PermIDs through the \
symbology lookup service, prints the RIC/PermID table and revokes the session token.\n\
\n\
Endpoint overrides: RDP_BASE_URL, RDP_AUTH_URL, RDP_AUTH_REVOKE_URL, RDP_CHAIN_URL, \
RDP_SYMBOLOGY_URL."
)]
pub struct Cli {
    /// Platform username.
    #[arg(long, env = "RDP_USERNAME")]
    pub username: String,

    /// Platform password.
    #[arg(long, env = "RDP_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Application key used as the OAuth client id.
    #[arg(long, env = "RDP_APP_KEY")]
    pub clientid: String,

    /// Chain RIC to expand (e.g. .AV.O, 0#.SETI, 0#.HSI).
    #[arg(long, default_value = DEFAULT_CHAIN)]
    pub chainric: String,

    /// Number of leading constituents to resolve.
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = parse_limit)]
    pub limit: usize,

    /// Enable debug-level logging (RUST_LOG takes precedence).
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Output format for the result table.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Per-request timeout in milliseconds.
    #[arg(
        long,
        default_value_t = chainperm_core::http_client::DEFAULT_TIMEOUT_MS,
        value_parser = parse_timeout_ms
    )]
    pub timeout_ms: u64,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned RIC / PermID columns.
    Table,
    /// JSON array of `{"RIC": ..., "PermID": ...}` objects.
    Json,
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    let limit: usize = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a positive integer"))?;
    if limit == 0 {
        return Err(String::from("limit must be at least 1"));
    }
    Ok(limit)
}

fn parse_timeout_ms(raw: &str) -> Result<u64, String> {
    let timeout_ms: u64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a positive number of milliseconds"))?;
    if timeout_ms == 0 {
        return Err(String::from("timeout must be at least 1 ms"));
    }
    Ok(timeout_ms)
}
