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

//! In-memory [`NamespacesAdmin`] that records every call.

use std::sync::Mutex;

use pulsarctl_common::common::naming::NamespaceName;
use pulsarctl_common::common::policies::RetentionPolicy;
use pulsarctl_error::AdminError;
use pulsarctl_error::PulsarctlResult;

use crate::admin::namespaces_admin::NamespacesAdmin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AdminCall {
    RemoveMaxConsumersPerTopic(String),
    SetMaxConsumersPerTopic(String, i32),
    GetMaxConsumersPerTopic(String),
    SetNamespaceMessageTtl(String, i32),
    GetNamespaceMessageTtl(String),
    RemoveNamespaceMessageTtl(String),
    SetRetention(String, RetentionPolicy),
    GetRetention(String),
}

#[derive(Debug, Default)]
pub(crate) struct MockNamespacesAdmin {
    calls: Mutex<Vec<AdminCall>>,
    failure: Option<AdminError>,
    max_consumers: Option<i32>,
    message_ttl: Option<i32>,
    retention: Option<RetentionPolicy>,
}

impl MockNamespacesAdmin {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every call is recorded and then answered with `error`.
    pub(crate) fn failing(error: AdminError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub(crate) fn with_max_consumers(mut self, max_consumers: i32) -> Self {
        self.max_consumers = Some(max_consumers);
        self
    }

    pub(crate) fn with_message_ttl(mut self, ttl: i32) -> Self {
        self.message_ttl = Some(ttl);
        self
    }

    pub(crate) fn with_retention(mut self, policy: RetentionPolicy) -> Self {
        self.retention = Some(policy);
        self
    }

    pub(crate) fn calls(&self) -> Vec<AdminCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: AdminCall) -> PulsarctlResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }
}

impl NamespacesAdmin for MockNamespacesAdmin {
    async fn remove_max_consumers_per_topic(&self, namespace: &NamespaceName) -> PulsarctlResult<()> {
        self.record(AdminCall::RemoveMaxConsumersPerTopic(namespace.to_string()))
    }

    async fn set_max_consumers_per_topic(&self, namespace: &NamespaceName, max_consumers: i32) -> PulsarctlResult<()> {
        self.record(AdminCall::SetMaxConsumersPerTopic(namespace.to_string(), max_consumers))
    }

    async fn get_max_consumers_per_topic(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>> {
        self.record(AdminCall::GetMaxConsumersPerTopic(namespace.to_string()))?;
        Ok(self.max_consumers)
    }

    async fn set_namespace_message_ttl(&self, namespace: &NamespaceName, ttl_in_seconds: i32) -> PulsarctlResult<()> {
        self.record(AdminCall::SetNamespaceMessageTtl(namespace.to_string(), ttl_in_seconds))
    }

    async fn get_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<i32>> {
        self.record(AdminCall::GetNamespaceMessageTtl(namespace.to_string()))?;
        Ok(self.message_ttl)
    }

    async fn remove_namespace_message_ttl(&self, namespace: &NamespaceName) -> PulsarctlResult<()> {
        self.record(AdminCall::RemoveNamespaceMessageTtl(namespace.to_string()))
    }

    async fn set_retention(&self, namespace: &NamespaceName, policy: RetentionPolicy) -> PulsarctlResult<()> {
        self.record(AdminCall::SetRetention(namespace.to_string(), policy))
    }

    async fn get_retention(&self, namespace: &NamespaceName) -> PulsarctlResult<Option<RetentionPolicy>> {
        self.record(AdminCall::GetRetention(namespace.to_string()))?;
        Ok(self.retention)
    }
}
