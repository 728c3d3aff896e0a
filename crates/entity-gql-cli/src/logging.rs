//! Log output for the CLI.
//!
//! Events go to stderr so that stdout carries only query text. `RUST_LOG`
//! applies when no `-v` flag is given.

use tracing_subscriber::EnvFilter;

pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("entity_gql=debug,entity_gql_compiler=debug"),
        _ => EnvFilter::new("entity_gql=trace,entity_gql_compiler=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
