//! CLI argument definitions.

use clap::Parser;

/// Top-level CLI parser for `ecs-taskdef`.
///
/// Each flag can also be supplied through the matching `INPUT_*` environment
/// variable, which is how a CI runner passes named action inputs.
#[derive(Debug, Parser)]
#[command(
    name = "ecs-taskdef",
    version,
    about = "Fetch and sanitize an ECS task definition for redeployment"
)]
pub struct Cli {
    /// AWS region for control-plane calls.
    #[arg(long, env = "INPUT_REGION")]
    pub region: String,

    /// Cluster containing the service; only consulted with `--service-name`.
    #[arg(long, env = "INPUT_CLUSTER_NAME", default_value = "")]
    pub cluster_name: String,

    /// Service whose currently deployed task definition should be fetched.
    /// When empty, `--task-name` selects the definition directly.
    #[arg(long, env = "INPUT_SERVICE_NAME", default_value = "")]
    pub service_name: String,

    /// Task definition name, `family:revision`, or ARN; only consulted when
    /// `--service-name` is empty.
    #[arg(long, env = "INPUT_TASK_NAME", default_value = "")]
    pub task_name: String,

    /// JSON document deep-merged onto the fetched definition.
    #[arg(long, env = "INPUT_REPLACEMENTS", default_value = "{}")]
    pub replacements: String,
}
