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

//! Namespace policy operations - Core business logic
//!
//! Values arrive as raw command-line strings or numbers; this layer parses
//! and normalises them before handing them to a [`NamespacesAdmin`].
//!
//! [`NamespacesAdmin`]: crate::admin::namespaces_admin::NamespacesAdmin

use pulsarctl_common::common::naming::NamespaceName;
use pulsarctl_common::common::policies::RetentionPolicy;
use pulsarctl_common::SizeUtils::parse_size;
use pulsarctl_common::TimeUtils::parse_relative_time_in_seconds;
use tracing::debug;

use crate::admin::namespaces_admin::NamespacesAdmin;
use crate::core::PulsarctlResult;

/// Namespace operations service
pub struct NamespaceService;

impl NamespaceService {
    /// Parses the `--time` and `--size` strings into a retention policy.
    ///
    /// The size is parsed first, so a request with two bad values reports the
    /// size.
    pub fn build_retention_policy(time: &str, size: &str) -> PulsarctlResult<RetentionPolicy> {
        let size_in_bytes = parse_size(size)?;
        let time_in_seconds = parse_relative_time_in_seconds(time)?;
        Ok(RetentionPolicy::from_parsed(size_in_bytes, time_in_seconds))
    }

    /// Sets the retention of a namespace and returns the policy that was sent.
    pub async fn set_retention<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
        time: &str,
        size: &str,
    ) -> PulsarctlResult<RetentionPolicy> {
        let policy = Self::build_retention_policy(time, size)?;
        debug!(%namespace, ?policy, "setting retention");
        admin.set_retention(namespace, policy).await?;
        Ok(policy)
    }

    pub async fn get_retention<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
    ) -> PulsarctlResult<Option<RetentionPolicy>> {
        admin.get_retention(namespace).await
    }

    pub async fn remove_max_consumers_per_topic<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
    ) -> PulsarctlResult<()> {
        debug!(%namespace, "removing max consumers per topic");
        admin.remove_max_consumers_per_topic(namespace).await
    }

    pub async fn set_max_consumers_per_topic<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
        max_consumers: i32,
    ) -> PulsarctlResult<()> {
        debug!(%namespace, max_consumers, "setting max consumers per topic");
        admin.set_max_consumers_per_topic(namespace, max_consumers).await
    }

    pub async fn get_max_consumers_per_topic<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
    ) -> PulsarctlResult<Option<i32>> {
        admin.get_max_consumers_per_topic(namespace).await
    }

    /// Sets the message TTL, in seconds
    pub async fn set_message_ttl<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
        ttl_in_seconds: i32,
    ) -> PulsarctlResult<()> {
        debug!(%namespace, ttl_in_seconds, "setting message ttl");
        admin.set_namespace_message_ttl(namespace, ttl_in_seconds).await
    }

    pub async fn get_message_ttl<A: NamespacesAdmin>(
        admin: &A,
        namespace: &NamespaceName,
    ) -> PulsarctlResult<Option<i32>> {
        admin.get_namespace_message_ttl(namespace).await
    }

    pub async fn remove_message_ttl<A: NamespacesAdmin>(admin: &A, namespace: &NamespaceName) -> PulsarctlResult<()> {
        debug!(%namespace, "removing message ttl");
        admin.remove_namespace_message_ttl(namespace).await
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::PulsarctlError;

    use super::*;
    use crate::admin::mock_namespaces_admin::AdminCall;
    use crate::admin::mock_namespaces_admin::MockNamespacesAdmin;

    #[test]
    fn test_build_retention_policy() {
        assert_eq!(
            NamespaceService::build_retention_policy("100m", "1G").unwrap(),
            RetentionPolicy::new(100, 1024)
        );
        assert_eq!(
            NamespaceService::build_retention_policy("-1", "-1").unwrap(),
            RetentionPolicy::new(-1, -1)
        );
        assert_eq!(
            NamespaceService::build_retention_policy("0", "0").unwrap(),
            RetentionPolicy::new(0, 0)
        );
        // truncates below one minute and one megabyte
        assert_eq!(
            NamespaceService::build_retention_policy("59s", "1023K").unwrap(),
            RetentionPolicy::new(0, 0)
        );
        assert_eq!(
            NamespaceService::build_retention_policy("2d", "10M").unwrap(),
            RetentionPolicy::new(2880, 10)
        );
    }

    #[test]
    fn test_build_retention_policy_reports_size_first() {
        let err = NamespaceService::build_retention_policy("xyz", "abc").unwrap_err();
        match err {
            PulsarctlError::InvalidFormat { value, .. } => assert_eq!(value, "abc"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = NamespaceService::build_retention_policy("xyz", "1G").unwrap_err();
        assert!(matches!(err, PulsarctlError::InvalidFormat { .. }));
    }

    #[tokio::test]
    async fn test_set_retention_sends_normalised_policy() {
        let admin = MockNamespacesAdmin::new();
        let namespace: NamespaceName = "tenant/ns".parse().unwrap();

        let policy = NamespaceService::set_retention(&admin, &namespace, "100m", "1G")
            .await
            .unwrap();

        assert_eq!(policy, RetentionPolicy::new(100, 1024));
        assert_eq!(
            admin.calls(),
            vec![AdminCall::SetRetention("tenant/ns".to_string(), policy)]
        );
    }

    #[tokio::test]
    async fn test_set_retention_with_bad_value_makes_no_call() {
        let admin = MockNamespacesAdmin::new();
        let namespace: NamespaceName = "tenant/ns".parse().unwrap();

        assert!(NamespaceService::set_retention(&admin, &namespace, "100", "1G")
            .await
            .is_err());
        assert!(admin.calls().is_empty());
    }
}
