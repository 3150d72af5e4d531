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

use std::io::Write;

use clap::Parser;
use pulsarctl_error::PulsarctlResult;

use crate::admin::namespaces_admin::NamespacesAdmin;
use crate::commands::command_descriptor::namespace_errors;
use crate::commands::command_descriptor::CommandDescriptor;
use crate::commands::command_util::CommandUtil;
use crate::core::namespace::NamespaceService;

pub const NAME: &str = "remove-message-ttl";
pub const ABOUT: &str = "Removes Message TTL for a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "Remove Message TTL setting for a namespace",
        "This command requires tenant admin permissions.",
    )
    .example(
        "Remove Message TTL setting for a namespace",
        "pulsarctl namespaces remove-message-ttl tenant/namespace",
    )
    .output(
        "normal output",
        "Successfully removed Message TTL setting for namespace tenant/namespace",
    )
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct RemoveMessageTtlSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,
}

impl RemoveMessageTtlSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        NamespaceService::remove_message_ttl(admin, &namespace).await?;
        writeln!(out, "Successfully removed Message TTL setting for namespace {namespace}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::AdminError;
    use pulsarctl_error::PulsarctlError;

    use super::*;
    use crate::admin::mock_namespaces_admin::AdminCall;
    use crate::admin::mock_namespaces_admin::MockNamespacesAdmin;

    #[tokio::test]
    async fn removes_ttl_and_confirms() {
        let admin = MockNamespacesAdmin::new();
        let mut out = Vec::new();
        let command = RemoveMessageTtlSubCommand::try_parse_from([NAME, "tenant/ns"]).unwrap();

        command.run(&admin, &mut out).await.unwrap();

        assert_eq!(
            admin.calls(),
            vec![AdminCall::RemoveNamespaceMessageTtl("tenant/ns".to_string())]
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Successfully removed Message TTL setting for namespace tenant/ns\n"
        );
    }

    #[tokio::test]
    async fn two_names_fail_before_calling_admin() {
        let admin = MockNamespacesAdmin::new();
        let mut out = Vec::new();
        let command = RemoveMessageTtlSubCommand::try_parse_from([NAME, "a/b", "c/d"]).unwrap();

        let err = command.run(&admin, &mut out).await.unwrap_err();

        assert!(matches!(err, PulsarctlError::Argument(_)));
        assert!(admin.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_tenant_is_surfaced() {
        let admin = MockNamespacesAdmin::failing(AdminError::tenant_not_found("Tenant does not exist"));
        let mut out = Vec::new();
        let command = RemoveMessageTtlSubCommand::try_parse_from([NAME, "ghost/ns"]).unwrap();

        let err = command.run(&admin, &mut out).await.unwrap_err();

        assert!(matches!(err, PulsarctlError::Admin(AdminError::TenantNotFound { .. })));
        assert!(out.is_empty());
    }
}
