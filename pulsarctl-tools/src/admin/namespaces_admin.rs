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

use pulsarctl_common::common::naming::NamespaceName;
use pulsarctl_common::common::policies::RetentionPolicy;
use pulsarctl_error::PulsarctlResult;

/// Namespace policy operations of the admin REST service.
///
/// Every method performs exactly one request. Getters return `None` when the
/// policy is not set on the namespace.
#[allow(async_fn_in_trait)]
pub trait NamespacesAdmin {
    /// Removes the max consumers per topic setting of a namespace.
    async fn remove_max_consumers_per_topic(&self, namespace: &NamespaceName) -> PulsarctlResult<()>;

    async fn set_max_consumers_per_topic(&self, namespace: &NamespaceName, max_consumers: i32) -> PulsarctlResult<()>;

    async fn get_max_consumers_per_topic(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>>;

    /// Sets the message TTL of a namespace, in seconds.
    async fn set_namespace_message_ttl(&self, namespace: &NamespaceName, ttl_in_seconds: i32) -> PulsarctlResult<()>;

    async fn get_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>>;

    async fn remove_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<()>;

    async fn set_retention(&self, namespace: &NamespaceName, policy: RetentionPolicy) -> PulsarctlResult<()>;

    async fn get_retention(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<RetentionPolicy>>;
}
