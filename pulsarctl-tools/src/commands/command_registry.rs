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

//! Registration table of every administration command
//!
//! The table is built once on first access. It drives the `show` command and
//! attaches each [`CommandDescriptor`] to the clap command tree.

use clap::Command;
use once_cell::sync::Lazy;

use crate::commands::command_descriptor::CommandDescriptor;
use crate::commands::namespace_commands;
use crate::commands::namespace_commands::get_max_consumers_per_topic;
use crate::commands::namespace_commands::get_message_ttl;
use crate::commands::namespace_commands::get_retention;
use crate::commands::namespace_commands::remove_max_consumers_per_topic;
use crate::commands::namespace_commands::remove_message_ttl;
use crate::commands::namespace_commands::set_max_consumers_per_topic;
use crate::commands::namespace_commands::set_message_ttl;
use crate::commands::namespace_commands::set_retention;

#[derive(Debug)]
pub struct CommandEntry {
    pub group: &'static str,
    pub name: &'static str,
    pub about: &'static str,
    pub descriptor: CommandDescriptor,
}

impl CommandEntry {
    fn new(group: &'static str, name: &'static str, about: &'static str, descriptor: fn() -> CommandDescriptor) -> Self {
        Self {
            group,
            name,
            about,
            descriptor: descriptor(),
        }
    }
}

static COMMAND_TABLE: Lazy<Vec<CommandEntry>> = Lazy::new(|| {
    let group = namespace_commands::GROUP;
    vec![
        CommandEntry::new(
            group,
            get_max_consumers_per_topic::NAME,
            get_max_consumers_per_topic::ABOUT,
            get_max_consumers_per_topic::descriptor,
        ),
        CommandEntry::new(
            group,
            get_message_ttl::NAME,
            get_message_ttl::ABOUT,
            get_message_ttl::descriptor,
        ),
        CommandEntry::new(
            group,
            get_retention::NAME,
            get_retention::ABOUT,
            get_retention::descriptor,
        ),
        CommandEntry::new(
            group,
            remove_max_consumers_per_topic::NAME,
            remove_max_consumers_per_topic::ABOUT,
            remove_max_consumers_per_topic::descriptor,
        ),
        CommandEntry::new(
            group,
            remove_message_ttl::NAME,
            remove_message_ttl::ABOUT,
            remove_message_ttl::descriptor,
        ),
        CommandEntry::new(
            group,
            set_max_consumers_per_topic::NAME,
            set_max_consumers_per_topic::ABOUT,
            set_max_consumers_per_topic::descriptor,
        ),
        CommandEntry::new(
            group,
            set_message_ttl::NAME,
            set_message_ttl::ABOUT,
            set_message_ttl::descriptor,
        ),
        CommandEntry::new(
            group,
            set_retention::NAME,
            set_retention::ABOUT,
            set_retention::descriptor,
        ),
    ]
});

pub fn entries() -> &'static [CommandEntry] {
    &COMMAND_TABLE
}

/// Attaches the long help and examples of every registered command.
///
/// # Panics
///
/// If a registered command is missing from `root`.
pub fn decorate(root: Command) -> Command {
    entries().iter().fold(root, |root, entry| {
        root.mut_subcommand(entry.group, |group| {
            group.mut_subcommand(entry.name, |command| {
                command
                    .long_about(entry.descriptor.long_about())
                    .after_long_help(entry.descriptor.examples_text())
            })
        })
    })
}
