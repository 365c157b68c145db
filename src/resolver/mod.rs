//! Task definition resolution: source selection, merge, and sanitization.

pub mod merge;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::ports::control_plane::ControlPlaneClient;

/// Top-level attributes the control plane assigns at registration time.
///
/// Re-registration rejects documents carrying any of these, so sanitization
/// removes them whether or not they are present.
pub const REGISTRATION_ASSIGNED_ATTRIBUTES: [&str; 8] = [
    "compatibilities",
    "taskDefinitionArn",
    "requiresAttributes",
    "revision",
    "status",
    "registeredAt",
    "deregisteredAt",
    "registeredBy",
];

/// Produce a sanitized task definition for the invocation configuration.
///
/// A non-empty `service` input resolves the definition through the service
/// currently running in `cluster`; otherwise `task` names the definition
/// directly. The fetched document then passes through [`sanitize`].
///
/// # Errors
///
/// Returns [`ResolveError::ServiceNotFound`] when the service lookup matches
/// nothing, [`ResolveError::Provider`] when a describe call fails, and
/// [`ResolveError::Parse`] when the replacements input is not valid JSON.
pub async fn resolve(
    client: &dyn ControlPlaneClient,
    config: &ResolverConfig,
) -> Result<Value, ResolveError> {
    let identifier = if config.service.is_empty() {
        config.task.clone()
    } else {
        deployed_task_definition(client, &config.cluster, &config.service).await?
    };

    let definition = client
        .describe_task_definition(&identifier)
        .await
        .map_err(|err| ResolveError::Provider(err.to_string()))?;
    debug!(%identifier, "fetched task definition");

    sanitize(definition, &config.replacements)
}

/// Identifier of the task definition deployed by `service` in `cluster`.
///
/// Service identifiers may be ambiguous; when the provider returns several
/// matches the first one wins.
async fn deployed_task_definition(
    client: &dyn ControlPlaneClient,
    cluster: &str,
    service: &str,
) -> Result<String, ResolveError> {
    let identifiers = [service.to_string()];
    let services = client
        .describe_services(cluster, &identifiers)
        .await
        .map_err(|err| ResolveError::Provider(err.to_string()))?;

    let Some(descriptor) = services.first() else {
        return Err(ResolveError::ServiceNotFound);
    };
    let identifier = descriptor.task_definition.clone().ok_or_else(|| {
        ResolveError::Provider(format!("service {service} does not reference a task definition"))
    })?;
    info!(task_definition = %identifier, "task definition taken from service");
    Ok(identifier)
}

/// Apply the override patch and strip registration-assigned attributes.
///
/// A blank patch string means the empty object. Pure function of its two
/// inputs; surviving fields are not otherwise normalized.
///
/// # Errors
///
/// Returns [`ResolveError::Parse`] when `replacements` is not valid JSON.
pub fn sanitize(definition: Value, replacements: &str) -> Result<Value, ResolveError> {
    let patch: Value = if replacements.trim().is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_str(replacements)?
    };

    let mut merged = merge::deep_merge(definition, patch);
    if let Some(document) = merged.as_object_mut() {
        for attribute in REGISTRATION_ASSIGNED_ATTRIBUTES {
            document.remove(attribute);
        }
    }
    debug!("merged and cleaned task definition");
    Ok(merged)
}
