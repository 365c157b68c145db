//! Live adapter for the `ControlPlaneClient` port against Amazon ECS.
//!
//! Speaks the control plane's `x-amz-json-1.1` protocol directly so that
//! task definitions arrive as raw JSON documents with the provider's key
//! casing intact, signing each request with SigV4 from the default AWS
//! credential chain.

use std::error::Error;
use std::time::{Duration, SystemTime};

use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::ports::control_plane::{ControlPlaneClient, DescribeFuture, ServiceDescriptor};

const TARGET_PREFIX: &str = "AmazonEC2ContainerServiceV20141113";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Live ECS control-plane client.
pub struct EcsClient {
    http: Client,
    credentials: SharedCredentialsProvider,
    region: String,
    endpoint: String,
}

/// Error body returned by the ECS JSON protocol.
#[derive(Deserialize)]
struct EcsErrorBody {
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

/// Successful `DescribeTaskDefinition` response envelope.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescribeTaskDefinitionResponse {
    task_definition: Option<Value>,
}

/// Successful `DescribeServices` response envelope.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescribeServicesResponse {
    #[serde(default)]
    services: Vec<ServiceDescriptor>,
}

impl EcsClient {
    /// Creates a client for `region`, loading credentials from the default
    /// AWS chain (environment, shared config, instance or runner role).
    ///
    /// # Errors
    ///
    /// Returns an error if no credentials provider is available or the HTTP
    /// client cannot be built.
    pub async fn new(region: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let shared = aws_config::from_env().load().await;
        let credentials =
            shared.credentials_provider().ok_or("no AWS credentials provider available")?;
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http,
            credentials,
            region: region.to_string(),
            endpoint: format!("https://ecs.{region}.amazonaws.com/"),
        })
    }

    /// Sends one signed operation and returns the response document.
    ///
    /// Non-2xx responses surface the provider's own error `message`, falling
    /// back to the raw body when the error shape is unexpected.
    async fn post_operation(
        &self,
        operation: &str,
        body: Value,
    ) -> Result<Value, Box<dyn Error + Send + Sync>> {
        let credentials = self.credentials.provide_credentials().await?;
        let payload = body.to_string();

        let headers = vec![
            ("content-type".to_string(), CONTENT_TYPE.to_string()),
            ("x-amz-target".to_string(), format!("{TARGET_PREFIX}.{operation}")),
        ];
        let signable_headers: Vec<(&str, &str)> =
            headers.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();
        let signable = SignableRequest::new(
            "POST",
            self.endpoint.as_str(),
            signable_headers.into_iter(),
            SignableBody::Bytes(payload.as_bytes()),
        )?;

        let identity = aws_credential_types::Credentials::new(
            credentials.access_key_id(),
            credentials.secret_access_key(),
            credentials.session_token().map(String::from),
            None,
            "ecs-taskdef",
        )
        .into();
        let signing_params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name("ecs")
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()?
            .into();

        let (instructions, _signature) = sign(signable, &signing_params)?.into_parts();

        let mut request = self.http.post(&self.endpoint);
        for (name, value) in &headers {
            request = request.header(name, value);
        }
        for (name, value) in instructions.headers() {
            request = request.header(name, value);
        }
        let response = request.body(payload).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<EcsErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(text);
            return Err(message.into());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl ControlPlaneClient for EcsClient {
    fn describe_task_definition(&self, identifier: &str) -> DescribeFuture<'_, Value> {
        let identifier = identifier.to_string();
        Box::pin(async move {
            let response = self
                .post_operation("DescribeTaskDefinition", json!({ "taskDefinition": identifier }))
                .await?;
            let envelope: DescribeTaskDefinitionResponse = serde_json::from_value(response)?;
            envelope
                .task_definition
                .ok_or_else(|| "describe response carried no task definition".into())
        })
    }

    fn describe_services(
        &self,
        cluster: &str,
        identifiers: &[String],
    ) -> DescribeFuture<'_, Vec<ServiceDescriptor>> {
        let cluster = cluster.to_string();
        let identifiers = identifiers.to_vec();
        Box::pin(async move {
            let response = self
                .post_operation(
                    "DescribeServices",
                    json!({ "cluster": cluster, "services": identifiers }),
                )
                .await?;
            let envelope: DescribeServicesResponse = serde_json::from_value(response)?;
            Ok(envelope.services)
        })
    }
}
