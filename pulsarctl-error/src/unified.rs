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

//! Unified error type for pulsarctl.
//!
//! Errors fall into three groups: local argument problems, malformed policy
//! values, and failures reported by the admin service (see [`AdminError`]).

mod admin;

use std::io;

pub use admin::AdminError;
use thiserror::Error;

/// Main error type for all pulsarctl operations
#[derive(Debug, Error)]
pub enum PulsarctlError {
    /// Wrong number of positional arguments, or an argument that failed validation
    #[error("{0}")]
    Argument(String),

    /// Malformed size or relative time string
    #[error("invalid format '{value}': {reason}")]
    InvalidFormat { value: String, reason: String },

    /// Failure surfaced by the admin service or the transport under it
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// Client configuration could not be loaded or is invalid
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PulsarctlError {
    #[inline]
    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument(message.into())
    }

    #[inline]
    pub fn invalid_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config { reason: reason.into() }
    }

    /// True for the argument and format errors raised before any remote call.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Argument(_) | Self::InvalidFormat { .. })
    }
}

/// Result alias used across the workspace
pub type PulsarctlResult<T> = std::result::Result<T, PulsarctlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_error_displays_message_verbatim() {
        let err = PulsarctlError::argument(
            "the namespace name is not specified or the namespace name is specified more than one",
        );
        assert_eq!(
            err.to_string(),
            "the namespace name is not specified or the namespace name is specified more than one"
        );
        assert!(err.is_local());
    }

    #[test]
    fn invalid_format_error() {
        let err = PulsarctlError::invalid_format("1X", "unknown size unit 'X'");
        assert_eq!(err.to_string(), "invalid format '1X': unknown size unit 'X'");
        assert!(err.is_local());
    }

    #[test]
    fn admin_error_is_transparent() {
        let err: PulsarctlError = AdminError::namespace_not_found("Namespace does not exist").into();
        assert_eq!(err.to_string(), "code: 404 reason: Namespace does not exist");
        assert!(!err.is_local());
    }

    #[test]
    fn io_error_converts() {
        let err: PulsarctlError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn config_error() {
        let err = PulsarctlError::config("web_service_url must start with http:// or https://");
        assert_eq!(
            err.to_string(),
            "invalid configuration: web_service_url must start with http:// or https://"
        );
    }
}
