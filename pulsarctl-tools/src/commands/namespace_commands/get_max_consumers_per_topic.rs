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

pub const NAME: &str = "get-max-consumers-per-topic";
pub const ABOUT: &str = "Get the max consumers per topic of a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "This command is used to get the max consumers per topic of a namespace.",
        "This command requires tenant admin permissions.",
    )
    .example(
        "Get the max consumers per topic of namespace (namespace-name)",
        "pulsarctl namespaces get-max-consumers-per-topic (namespace-name)",
    )
    .output(
        "normal output",
        "The max consumers per topic of namespace (namespace-name) is 10",
    )
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct GetMaxConsumersPerTopicSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,
}

impl GetMaxConsumersPerTopicSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        match NamespaceService::get_max_consumers_per_topic(admin, &namespace).await? {
            Some(max_consumers) => writeln!(
                out,
                "The max consumers per topic of namespace {namespace} is {max_consumers}"
            )?,
            None => writeln!(out, "The max consumers per topic of namespace {namespace} is not set")?,
        }
        Ok(())
    }
}
