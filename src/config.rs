//! Invocation configuration threaded through the resolver.

use std::path::PathBuf;

use crate::cli::Cli;

/// All inputs for one invocation, read once at startup.
///
/// Bundling these keeps the resolver free of ad hoc environment reads and
/// lets tests drive it with plain data.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// AWS region for control-plane calls.
    pub region: String,
    /// Cluster containing `service`; ignored when `service` is empty.
    pub cluster: String,
    /// Service whose deployed task definition is wanted; empty selects the
    /// direct-by-name path.
    pub service: String,
    /// Task definition identifier for the direct path.
    pub task: String,
    /// JSON override patch applied on top of the fetched definition.
    pub replacements: String,
    /// Directory receiving the output file.
    pub temp_dir: PathBuf,
}

impl ResolverConfig {
    /// Build the configuration from parsed CLI arguments.
    ///
    /// The output directory honors the CI runner's `RUNNER_TEMP` when set
    /// and falls back to the OS temp directory.
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            region: cli.region,
            cluster: cli.cluster_name,
            service: cli.service_name,
            task: cli.task_name,
            replacements: cli.replacements,
            temp_dir: std::env::var_os("RUNNER_TEMP")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResolverConfig;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn maps_cli_inputs() {
        let cli = Cli::parse_from([
            "ecs-taskdef",
            "--region",
            "us-east-1",
            "--service-name",
            "api",
            "--cluster-name",
            "web",
            "--replacements",
            r#"{"cpu":"512"}"#,
        ]);
        let config = ResolverConfig::from_cli(cli);
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.cluster, "web");
        assert_eq!(config.service, "api");
        assert_eq!(config.task, "");
        assert_eq!(config.replacements, r#"{"cpu":"512"}"#);
    }
}
