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
use crate::cli::validators::validate_message_ttl;
use crate::commands::command_descriptor::namespace_errors;
use crate::commands::command_descriptor::CommandDescriptor;
use crate::commands::command_util::CommandUtil;
use crate::core::namespace::NamespaceService;

pub const NAME: &str = "set-message-ttl";
pub const ABOUT: &str = "Set Message TTL for a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "Set Message TTL for a namespace",
        "This command requires tenant admin permissions.",
    )
    .example(
        "Set Message TTL for a namespace",
        "pulsarctl namespaces set-message-ttl tenant/namespace -t 10",
    )
    .output("normal output", "Set message TTL successfully for [tenant/namespace]")
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct SetMessageTtlSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,

    #[arg(
        short = 't',
        long = "messageTTL",
        required = true,
        allow_negative_numbers = true,
        help = "Message TTL in seconds, 0 disables expiry"
    )]
    message_ttl: i32,
}

impl SetMessageTtlSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        validate_message_ttl(self.message_ttl)?;
        NamespaceService::set_message_ttl(admin, &namespace, self.message_ttl).await?;
        writeln!(out, "Set message TTL successfully for [{namespace}]")?;
        Ok(())
    }
}
