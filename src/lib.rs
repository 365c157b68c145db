//! Core library for the `ecs-taskdef` CLI.
//!
//! One CI-pipeline step: fetch an Amazon ECS task definition (directly, or
//! via the service currently running it), deep-merge caller-supplied JSON
//! overrides onto it, strip the attributes the control plane assigns at
//! registration time, and write the result to a temp file whose path is the
//! step's output.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ports;
pub mod resolver;

use clap::Parser;
use tracing::info;

use crate::adapters::aws::EcsClient;
use crate::config::ResolverConfig;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the control plane
/// rejects a describe call, the named service does not exist, the
/// replacements input is not valid JSON, or the output file cannot be
/// written. The message is surfaced as-is; no output is produced on any
/// failure path.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let config = ResolverConfig::from_cli(cli);

    info!(region = %config.region, "starting ECS control-plane client");
    let client = EcsClient::new(&config.region).await.map_err(|err| err.to_string())?;

    let definition = resolver::resolve(&client, &config).await.map_err(|err| err.to_string())?;
    let path = output::write_task_definition(&config.temp_dir, &definition)
        .map_err(|err| err.to_string())?;
    output::publish_path(&path).map_err(|err| err.to_string())
}

/// Install the stderr tracing subscriber so stdout stays reserved for the
/// output path. A subscriber installed earlier (e.g. by a test harness) wins.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr)),
    );
}
