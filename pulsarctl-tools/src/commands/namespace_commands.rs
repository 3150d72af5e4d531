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

pub(crate) mod get_max_consumers_per_topic;
pub(crate) mod get_message_ttl;
pub(crate) mod get_retention;
pub(crate) mod remove_max_consumers_per_topic;
pub(crate) mod remove_message_ttl;
pub(crate) mod set_max_consumers_per_topic;
pub(crate) mod set_message_ttl;
pub(crate) mod set_retention;

use std::io;
use std::io::Write;

use clap::Subcommand;
use pulsarctl_error::PulsarctlResult;

use crate::admin::namespaces_admin::NamespacesAdmin;
use crate::commands::namespace_commands::get_max_consumers_per_topic::GetMaxConsumersPerTopicSubCommand;
use crate::commands::namespace_commands::get_message_ttl::GetMessageTtlSubCommand;
use crate::commands::namespace_commands::get_retention::GetRetentionSubCommand;
use crate::commands::namespace_commands::remove_max_consumers_per_topic::RemoveMaxConsumersPerTopicSubCommand;
use crate::commands::namespace_commands::remove_message_ttl::RemoveMessageTtlSubCommand;
use crate::commands::namespace_commands::set_max_consumers_per_topic::SetMaxConsumersPerTopicSubCommand;
use crate::commands::namespace_commands::set_message_ttl::SetMessageTtlSubCommand;
use crate::commands::namespace_commands::set_retention::SetRetentionSubCommand;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;

pub const GROUP: &str = "namespaces";

#[derive(Debug, Clone, Subcommand)]
pub enum NamespaceCommands {
    #[command(
        name = get_max_consumers_per_topic::NAME,
        about = get_max_consumers_per_topic::ABOUT,
    )]
    GetMaxConsumersPerTopic(GetMaxConsumersPerTopicSubCommand),

    #[command(name = get_message_ttl::NAME, about = get_message_ttl::ABOUT)]
    GetMessageTtl(GetMessageTtlSubCommand),

    #[command(name = get_retention::NAME, about = get_retention::ABOUT)]
    GetRetention(GetRetentionSubCommand),

    #[command(
        name = remove_max_consumers_per_topic::NAME,
        about = remove_max_consumers_per_topic::ABOUT,
    )]
    RemoveMaxConsumersPerTopic(RemoveMaxConsumersPerTopicSubCommand),

    #[command(name = remove_message_ttl::NAME, about = remove_message_ttl::ABOUT)]
    RemoveMessageTtl(RemoveMessageTtlSubCommand),

    #[command(
        name = set_max_consumers_per_topic::NAME,
        about = set_max_consumers_per_topic::ABOUT,
    )]
    SetMaxConsumersPerTopic(SetMaxConsumersPerTopicSubCommand),

    #[command(name = set_message_ttl::NAME, about = set_message_ttl::ABOUT)]
    SetMessageTtl(SetMessageTtlSubCommand),

    #[command(name = set_retention::NAME, about = set_retention::ABOUT)]
    SetRetention(SetRetentionSubCommand),
}

impl NamespaceCommands {
    /// Runs the command against `admin`, writing its result to `out`.
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        match self {
            NamespaceCommands::GetMaxConsumersPerTopic(value) => value.run(admin, out).await,
            NamespaceCommands::GetMessageTtl(value) => value.run(admin, out).await,
            NamespaceCommands::GetRetention(value) => value.run(admin, out).await,
            NamespaceCommands::RemoveMaxConsumersPerTopic(value) => value.run(admin, out).await,
            NamespaceCommands::RemoveMessageTtl(value) => value.run(admin, out).await,
            NamespaceCommands::SetMaxConsumersPerTopic(value) => value.run(admin, out).await,
            NamespaceCommands::SetMessageTtl(value) => value.run(admin, out).await,
            NamespaceCommands::SetRetention(value) => value.run(admin, out).await,
        }
    }
}

impl CommandExecute for NamespaceCommands {
    async fn execute(&self, common: &CommonArgs) -> PulsarctlResult<()> {
        let admin = common.admin_builder()?.build()?;
        self.run(&admin, &mut io::stdout()).await
    }
}
