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

//! Errors reported by the admin REST service

use thiserror::Error;

/// Failures surfaced by the admin client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// 404 for a namespace that does not exist
    #[error("code: 404 reason: {reason}")]
    NamespaceNotFound { reason: String },

    /// 404 for a tenant that does not exist
    #[error("code: 404 reason: {reason}")]
    TenantNotFound { reason: String },

    /// Any other non-success status, e.g. a rejected policy combination
    #[error("code: {code} reason: {reason}")]
    Remote { code: u16, reason: String },

    /// The request never produced a response
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },
}

impl AdminError {
    #[inline]
    pub fn namespace_not_found(reason: impl Into<String>) -> Self {
        Self::NamespaceNotFound { reason: reason.into() }
    }

    #[inline]
    pub fn tenant_not_found(reason: impl Into<String>) -> Self {
        Self::TenantNotFound { reason: reason.into() }
    }

    #[inline]
    pub fn remote(code: u16, reason: impl Into<String>) -> Self {
        Self::Remote {
            code,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn network(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_errors_render_like_the_service() {
        let err = AdminError::namespace_not_found("Namespace does not exist");
        assert_eq!(err.to_string(), "code: 404 reason: Namespace does not exist");

        let err = AdminError::tenant_not_found("Tenant does not exist");
        assert_eq!(err.to_string(), "code: 404 reason: Tenant does not exist");
    }

    #[test]
    fn remote_error() {
        let err = AdminError::remote(412, "Retention Quota must exceed configured backlog quota for namespace.");
        assert_eq!(
            err.to_string(),
            "code: 412 reason: Retention Quota must exceed configured backlog quota for namespace."
        );
    }

    #[test]
    fn network_error_names_the_url() {
        let err = AdminError::network("http://localhost:8080/admin/v2/namespaces/a/b/retention", "connection refused");
        assert!(err.to_string().contains("connection refused"));
        assert!(err.to_string().contains("/admin/v2/namespaces/a/b/retention"));
    }
}
