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

//! Admin client builder
//!
//! [`AdminBuilder`] resolves the layered [`ClientConfig`] and applies the
//! command-line overrides on top of it before building the HTTP client.

use std::collections::HashMap;
use std::path::PathBuf;

use pulsarctl_common::common::client_config::ClientConfig;
use tracing::debug;

use crate::admin::default_pulsar_admin::DefaultPulsarAdmin;
use crate::core::PulsarctlResult;

/// Builder for creating and configuring admin clients
///
/// # Examples
///
/// ```rust,ignore
/// use pulsarctl_tools::core::admin::AdminBuilder;
///
/// let admin = AdminBuilder::new()
///     .web_service_url("http://localhost:8080")
///     .auth_token("eyJhbGciOi...")
///     .timeout_millis(5000)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminBuilder {
    config_file: Option<PathBuf>,
    env: Option<HashMap<String, String>>,
    web_service_url: Option<String>,
    auth_token: Option<String>,
    timeout_millis: Option<u64>,
    tls_allow_insecure: Option<bool>,
    tls_trust_certs_file_path: Option<PathBuf>,
}

impl AdminBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from this file instead of the default location
    #[inline]
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Use these variables instead of the process environment
    #[inline]
    pub fn env_source(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    #[inline]
    pub fn web_service_url(mut self, url: impl Into<String>) -> Self {
        self.web_service_url = Some(url.into());
        self
    }

    #[inline]
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set request timeout in milliseconds
    #[inline]
    pub fn timeout_millis(mut self, timeout: u64) -> Self {
        self.timeout_millis = Some(timeout);
        self
    }

    #[inline]
    pub fn tls_allow_insecure(mut self, allow: bool) -> Self {
        self.tls_allow_insecure = Some(allow);
        self
    }

    #[inline]
    pub fn tls_trust_certs_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls_trust_certs_file_path = Some(path.into());
        self
    }

    /// Loads the layered configuration and applies the builder overrides.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or the
    /// resulting settings are invalid.
    pub fn resolve_config(&self) -> PulsarctlResult<ClientConfig> {
        let mut config = ClientConfig::load_with_env(self.config_file.as_deref(), self.env.clone())?;

        if let Some(url) = &self.web_service_url {
            config.web_service_url = url.trim().to_string();
        }
        if let Some(token) = &self.auth_token {
            config.auth_token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout_millis {
            config.request_timeout_millis = timeout;
        }
        if let Some(allow) = self.tls_allow_insecure {
            config.tls_allow_insecure_connection = allow;
        }
        if let Some(path) = &self.tls_trust_certs_file_path {
            config.tls_trust_certs_file_path = Some(path.clone());
        }

        config.validate()?;
        debug!(
            web_service_url = %config.web_service_url,
            token = config.auth_token.is_some(),
            "resolved client config"
        );
        Ok(config)
    }

    /// Build the admin client
    pub fn build(self) -> PulsarctlResult<DefaultPulsarAdmin> {
        let config = self.resolve_config()?;
        DefaultPulsarAdmin::new(&config)
    }
}

/// Helper function to create an admin client with just the service URL
///
/// Equivalent to:
/// ```rust,ignore
/// AdminBuilder::new().web_service_url(url).build()
/// ```
#[inline]
pub fn create_admin(web_service_url: impl Into<String>) -> PulsarctlResult<DefaultPulsarAdmin> {
    AdminBuilder::new().web_service_url(web_service_url).build()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pulsarctl_error::PulsarctlError;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_builder_configuration() {
        let builder = AdminBuilder::new()
            .web_service_url("http://127.0.0.1:8080")
            .auth_token("token")
            .timeout_millis(5000)
            .tls_allow_insecure(true);

        assert_eq!(builder.web_service_url, Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(builder.auth_token, Some("token".to_string()));
        assert_eq!(builder.timeout_millis, Some(5000));
        assert_eq!(builder.tls_allow_insecure, Some(true));
        assert_eq!(builder.tls_trust_certs_file_path, None);
    }

    #[test]
    fn flags_override_environment() {
        let config = AdminBuilder::new()
            .env_source(env(&[
                ("PULSARCTL_WEB_SERVICE_URL", "http://from-env:8080"),
                ("PULSARCTL_AUTH_TOKEN", "env-token"),
            ]))
            .web_service_url(" http://from-flag:8080 ")
            .resolve_config()
            .unwrap();

        assert_eq!(config.web_service_url, "http://from-flag:8080");
        assert_eq!(config.auth_token.as_deref(), Some("env-token"));
    }

    #[test]
    fn environment_applies_without_flags() {
        let config = AdminBuilder::new()
            .env_source(env(&[("PULSARCTL_REQUEST_TIMEOUT_MILLIS", "1500")]))
            .resolve_config()
            .unwrap();

        assert_eq!(config.request_timeout_millis, 1500);
        assert_eq!(config.web_service_url, "http://localhost:8080");
    }

    #[test]
    fn config_file_is_layered_under_flags() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "web_service_url = \"https://file:8443\"").unwrap();
        writeln!(file, "tls_allow_insecure_connection = true").unwrap();

        let config = AdminBuilder::new()
            .config_file(file.path())
            .env_source(HashMap::new())
            .timeout_millis(42)
            .resolve_config()
            .unwrap();

        assert_eq!(config.web_service_url, "https://file:8443");
        assert!(config.tls_allow_insecure_connection);
        assert_eq!(config.request_timeout_millis, 42);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = AdminBuilder::new()
            .env_source(HashMap::new())
            .web_service_url("localhost:8080")
            .build()
            .unwrap_err();

        assert!(matches!(err, PulsarctlError::Config { .. }));
    }

    #[test]
    fn builds_client_for_resolved_url() {
        let admin = AdminBuilder::new()
            .env_source(HashMap::new())
            .web_service_url("http://broker:8080/")
            .build()
            .unwrap();

        assert_eq!(admin.web_service_url(), "http://broker:8080");
    }
}
