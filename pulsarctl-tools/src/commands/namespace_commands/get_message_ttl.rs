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

pub const NAME: &str = "get-message-ttl";
pub const ABOUT: &str = "Get Message TTL for a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "Get Message TTL for a namespace",
        "This command requires tenant admin permissions.",
    )
    .example(
        "Get Message TTL for a namespace",
        "pulsarctl namespaces get-message-ttl tenant/namespace",
    )
    .output(
        "normal output",
        "The message TTL of namespace tenant/namespace is 10 seconds",
    )
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct GetMessageTtlSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,
}

impl GetMessageTtlSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        match NamespaceService::get_message_ttl(admin, &namespace).await? {
            Some(ttl) => writeln!(out, "The message TTL of namespace {namespace} is {ttl} seconds")?,
            None => writeln!(out, "The message TTL of namespace {namespace} is not set")?,
        }
        Ok(())
    }
}
