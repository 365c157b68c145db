//! Control-plane port for describing task definitions and services.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Boxed future type alias used by [`ControlPlaneClient`] to keep the trait
/// dyn-compatible.
pub type DescribeFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// One service entry from a describe-services call.
///
/// Only the fields the resolver consumes are modeled; the provider returns
/// many more, which are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    /// The service's name.
    #[serde(default)]
    pub service_name: Option<String>,
    /// Identifier of the task definition the service currently deploys.
    #[serde(default)]
    pub task_definition: Option<String>,
    /// Provider-reported service status (e.g. `"ACTIVE"`).
    #[serde(default)]
    pub status: Option<String>,
}

/// Describes task definitions and services in the cluster control plane.
///
/// Abstracting the control plane keeps the resolver testable without real
/// network calls.
pub trait ControlPlaneClient: Send + Sync {
    /// Fetches one task definition revision as the provider's raw document.
    ///
    /// `identifier` may be a family name, `family:revision`, or an ARN.
    ///
    /// # Errors
    ///
    /// Returns the provider's error (not-found, permission, transport) with
    /// its message intact.
    fn describe_task_definition(&self, identifier: &str) -> DescribeFuture<'_, Value>;

    /// Lists the services matching `identifiers` within `cluster`.
    ///
    /// Returns zero or more descriptors; an ambiguous identifier may match
    /// more than one service.
    ///
    /// # Errors
    ///
    /// Returns the provider's error with its message intact.
    fn describe_services(
        &self,
        cluster: &str,
        identifiers: &[String],
    ) -> DescribeFuture<'_, Vec<ServiceDescriptor>>;
}
