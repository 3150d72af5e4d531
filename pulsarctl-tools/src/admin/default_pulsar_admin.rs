// Copyright 2023 The Pulsarctl Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP implementation of the admin API on top of `reqwest`.

use std::fs;

use pulsarctl_common::common::client_config::ClientConfig;
use pulsarctl_common::common::naming::NamespaceName;
use pulsarctl_common::common::policies::RetentionPolicy;
use pulsarctl_error::AdminError;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::AUTHORIZATION;
use reqwest::Certificate;
use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::admin::namespaces_admin::NamespacesAdmin;

const MAX_CONSUMERS_PER_TOPIC: &str = "maxConsumersPerTopic";
const MESSAGE_TTL: &str = "messageTTL";
const RETENTION: &str = "retention";

const NAMESPACE_NOT_EXIST: &str = "Namespace does not exist";

/// Admin client talking to the web service of a cluster.
#[derive(Debug, Clone)]
pub struct DefaultPulsarAdmin {
    client: Client,
    web_service_url: String,
}

impl DefaultPulsarAdmin {
    pub fn new(config: &ClientConfig) -> PulsarctlResult<Self> {
        config.validate()?;
        let mut builder = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("pulsarctl-rust/", env!("CARGO_PKG_VERSION")));

        if let Some(token) = config.auth_token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| PulsarctlError::config(format!("invalid auth token: {e}")))?;
            value.set_sensitive(true);
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }
        if config.tls_allow_insecure_connection {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(path) = &config.tls_trust_certs_file_path {
            let pem = fs::read(path)?;
            let certificate = Certificate::from_pem(&pem).map_err(|e| {
                PulsarctlError::config(format!("invalid trust certificate {}: {e}", path.display()))
            })?;
            builder = builder.add_root_certificate(certificate);
        }

        let client = builder
            .build()
            .map_err(|e| PulsarctlError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            web_service_url: config.web_service_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn web_service_url(&self) -> &str {
        &self.web_service_url
    }

    fn url(&self, namespace: &NamespaceName, policy: &str) -> String {
        format!("{}{}", self.web_service_url, namespace_policy_path(namespace, policy))
    }

    async fn delete(&self, url: &str) -> PulsarctlResult<()> {
        self.send(self.client.delete(url), url).await.map(|_| ())
    }

    async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> PulsarctlResult<()> {
        self.send(self.client.post(url).json(body), url).await.map(|_| ())
    }

    async fn get_optional<T: DeserializeOwned>(&self, url: &str) -> PulsarctlResult<Option<T>> {
        let body = self.send(self.client.get(url), url).await?;
        parse_optional_body(&body)
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, request: RequestBuilder, url: &str) -> PulsarctlResult<String> {
        debug!(url, "sending admin request");
        let response = request
            .send()
            .await
            .map_err(|e| AdminError::network(url, e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::network(url, e.to_string()))?;
        debug!(url, %status, "admin response received");

        if status.is_success() {
            Ok(body)
        } else {
            Err(error_from_response(status, &body).into())
        }
    }
}

impl NamespacesAdmin for DefaultPulsarAdmin {
    async fn remove_max_consumers_per_topic(&self, namespace: &NamespaceName) -> PulsarctlResult<()> {
        self.delete(&self.url(namespace, MAX_CONSUMERS_PER_TOPIC)).await
    }

    async fn set_max_consumers_per_topic(&self, namespace: &NamespaceName, max_consumers: i32) -> PulsarctlResult<()> {
        self.post_json(&self.url(namespace, MAX_CONSUMERS_PER_TOPIC), &max_consumers)
            .await
    }

    async fn get_max_consumers_per_topic(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>> {
        self.get_optional(&self.url(namespace, MAX_CONSUMERS_PER_TOPIC)).await
    }

    async fn set_namespace_message_ttl(&self, namespace: &NamespaceName, ttl_in_seconds: i32) -> PulsarctlResult<()> {
        self.post_json(&self.url(namespace, MESSAGE_TTL), &ttl_in_seconds).await
    }

    async fn get_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>> {
        self.get_optional(&self.url(namespace, MESSAGE_TTL)).await
    }

    async fn remove_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<()> {
        self.delete(&self.url(namespace, MESSAGE_TTL)).await
    }

    async fn set_retention(&self, namespace: &NamespaceName, policy: RetentionPolicy) -> PulsarctlResult<()> {
        self.post_json(&self.url(namespace, RETENTION), &policy).await
    }

    async fn get_retention(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<RetentionPolicy>> {
        self.get_optional(&self.url(namespace, RETENTION)).await
    }
}

/// Path of a namespace policy; legacy names carrying a cluster use the v1 API.
pub(crate) fn namespace_policy_path(namespace: &NamespaceName, policy: &str) -> String {
    match namespace.cluster() {
        Some(cluster) => format!(
            "/admin/namespaces/{}/{}/{}/{}",
            namespace.tenant(),
            cluster,
            namespace.local_name(),
            policy
        ),
        None => format!(
            "/admin/v2/namespaces/{}/{}/{}",
            namespace.tenant(),
            namespace.local_name(),
            policy
        ),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    reason: Option<String>,
}

/// Maps a non-success response to an [`AdminError`].
///
/// A 404 is a missing tenant when the reason says so, otherwise a missing
/// namespace.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> AdminError {
    let reason = reason_from_body(body);
    if status == StatusCode::NOT_FOUND {
        let reason = reason.unwrap_or_else(|| NAMESPACE_NOT_EXIST.to_string());
        if reason.to_ascii_lowercase().contains("tenant") {
            AdminError::tenant_not_found(reason)
        } else {
            AdminError::namespace_not_found(reason)
        }
    } else {
        let reason = reason.unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
        AdminError::remote(status.as_u16(), reason)
    }
}

fn reason_from_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            reason: Some(reason),
        }) if !reason.trim().is_empty() => Some(reason),
        _ => Some(body.to_string()),
    }
}

/// An empty or `null` body means the policy is not set.
pub(crate) fn parse_optional_body<T: DeserializeOwned>(body: &str) -> PulsarctlResult<Option<T>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(body)
        .map_err(|e| PulsarctlError::Serialization(format!("unexpected response body '{body}': {e}")))
}
