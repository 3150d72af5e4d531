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

pub const NAME: &str = "remove-max-consumers-per-topic";
pub const ABOUT: &str = "Remove the max consumers per topic setting for a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "This command is used to remove the max consumers per topic setting for a namespace.",
        "This command requires super-user permissions and broker has write policies permission.",
    )
    .example(
        "Remove the max consumers per topic setting for namespace (namespace-name)",
        "pulsarctl namespaces remove-max-consumers-per-topic (namespace-name)",
    )
    .output(
        "normal output",
        "Successfully removed the max consumers per topic setting for namespace (namespace-name)",
    )
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct RemoveMaxConsumersPerTopicSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,
}

impl RemoveMaxConsumersPerTopicSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        NamespaceService::remove_max_consumers_per_topic(admin, &namespace).await?;
        writeln!(
            out,
            "Successfully removed the max consumers per topic setting for namespace {namespace}"
        )?;
        Ok(())
    }
}
