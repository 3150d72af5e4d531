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

//! Connection settings for the admin service.
//!
//! Settings are layered: built-in defaults, then a configuration file, then
//! `PULSARCTL_*` environment variables. Command-line flags are applied on top
//! by the CLI.

use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_WEB_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_MILLIS: u64 = 30_000;
pub const ENV_PREFIX: &str = "PULSARCTL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub web_service_url: String,
    pub auth_token: Option<String>,
    pub tls_allow_insecure_connection: bool,
    pub tls_trust_certs_file_path: Option<PathBuf>,
    pub request_timeout_millis: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            web_service_url: DEFAULT_WEB_SERVICE_URL.to_string(),
            auth_token: None,
            tls_allow_insecure_connection: false,
            tls_trust_certs_file_path: None,
            request_timeout_millis: DEFAULT_REQUEST_TIMEOUT_MILLIS,
        }
    }
}

impl ClientConfig {
    /// Loads the configuration from `config_file` (or the default location when
    /// it exists) and the process environment.
    pub fn load(config_file: Option<&Path>) -> PulsarctlResult<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Same as [`ClientConfig::load`], reading variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(config_file: Option<&Path>, env: Option<HashMap<String, String>>) -> PulsarctlResult<Self> {
        let mut builder = Config::builder();
        match config_file {
            Some(path) => {
                debug!("loading client config from {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                if let Some(path) = Self::default_config_file().filter(|path| path.exists()) {
                    debug!("loading client config from {}", path.display());
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                }
            }
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(env));

        let config: ClientConfig = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(into_config_error)?;
        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/pulsarctl/config.toml` or the platform equivalent.
    pub fn default_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pulsarctl").join("config.toml"))
    }

    pub fn validate(&self) -> PulsarctlResult<()> {
        let url = self.web_service_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PulsarctlError::config(format!(
                "web_service_url '{url}' must start with http:// or https://"
            )));
        }
        if self.request_timeout_millis == 0 {
            return Err(PulsarctlError::config("request_timeout_millis must be greater than 0"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_millis)
    }
}

fn into_config_error(error: ConfigError) -> PulsarctlError {
    PulsarctlError::config(error.to_string())
}
