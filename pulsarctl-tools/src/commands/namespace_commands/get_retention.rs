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
use crate::cli::formatters::get_formatter;
use crate::cli::formatters::OutputFormat;
use crate::commands::command_descriptor::namespace_errors;
use crate::commands::command_descriptor::CommandDescriptor;
use crate::commands::command_util::CommandUtil;
use crate::core::namespace::NamespaceService;

pub const NAME: &str = "get-retention";
pub const ABOUT: &str = "Get the retention policy of a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "Get the retention policy of a namespace",
        "This command requires tenant admin permissions.",
    )
    .example(
        "Get the retention policy of a namespace",
        "pulsarctl namespaces get-retention tenant/namespace",
    )
    .example(
        "Get the retention policy of a namespace as a table",
        "pulsarctl namespaces get-retention tenant/namespace -o table",
    )
    .output(
        "normal output",
        r#"{"retentionTimeInMinutes": 0, "retentionSizeInMB": 0}"#,
    )
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct GetRetentionSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Json,
        help = "Output format"
    )]
    output: OutputFormat,
}

impl GetRetentionSubCommand {
    /// An unset policy is printed as the default one: no retention.
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        let policy = NamespaceService::get_retention(admin, &namespace)
            .await?
            .unwrap_or_default();
        writeln!(out, "{}", get_formatter(self.output).format(&policy))?;
        Ok(())
    }
}
