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

//! Tenant-qualified namespace names.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use pulsarctl_error::PulsarctlError;
use regex::Regex;

static NAME_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-=:.A-Za-z0-9_]+$").expect("valid name segment pattern"));

/// A namespace name in the `tenant/namespace` form, or the legacy
/// `tenant/cluster/namespace` form still accepted by the admin service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceName {
    tenant: String,
    cluster: Option<String>,
    local_name: String,
}

impl NamespaceName {
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    fn validate(&self) -> Result<(), PulsarctlError> {
        let segments = [Some(&self.tenant), self.cluster.as_ref(), Some(&self.local_name)];
        for segment in segments.into_iter().flatten() {
            if !NAME_SEGMENT.is_match(segment) {
                return Err(PulsarctlError::argument(format!(
                    "Invalid namespace name [{self}]: '{segment}' contains characters outside [-=:.a-zA-Z0-9_]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for NamespaceName {
    type Err = PulsarctlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        let name = match parts.as_slice() {
            [tenant, local_name] => NamespaceName {
                tenant: (*tenant).to_string(),
                cluster: None,
                local_name: (*local_name).to_string(),
            },
            [tenant, cluster, local_name] => NamespaceName {
                tenant: (*tenant).to_string(),
                cluster: Some((*cluster).to_string()),
                local_name: (*local_name).to_string(),
            },
            _ => {
                return Err(PulsarctlError::argument(format!(
                    "Invalid namespace name [{s}]: the namespace name must be in the format of tenant/namespace"
                )))
            }
        };
        name.validate()?;
        Ok(name)
    }
}

impl fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cluster {
            Some(cluster) => write!(f, "{}/{}/{}", self.tenant, cluster, self.local_name),
            None => write!(f, "{}/{}", self.tenant, self.local_name),
        }
    }
}
