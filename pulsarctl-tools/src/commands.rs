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

pub mod command_descriptor;
pub mod command_registry;
pub mod command_util;
pub mod namespace_commands;

use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use crate::cli::validators::validate_web_service_url;
use crate::core::admin::AdminBuilder;
use crate::core::PulsarctlResult;

/// A trait that defines the execution behavior for commands.
///
/// Implementors resolve whatever they need from the shared root flags, run
/// the command and print its result to stdout.
#[allow(async_fn_in_trait)]
pub trait CommandExecute {
    /// Executes the command.
    ///
    /// # Parameters
    /// - `common`: the root flags, used to build the admin client.
    async fn execute(&self, common: &CommonArgs) -> PulsarctlResult<()>;
}

/// Flags accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    #[arg(
        short = 's',
        long = "admin-service-url",
        global = true,
        value_name = "URL",
        help = "The admin web service url that pulsarctl connects to, eg: 'http://localhost:8080'"
    )]
    pub admin_service_url: Option<String>,

    #[arg(long = "token", global = true, help = "Using the token to authentication")]
    pub token: Option<String>,

    #[arg(
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Client configuration file (toml, yaml or json)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "tls-allow-insecure",
        global = true,
        help = "Allow TLS insecure connection"
    )]
    pub tls_allow_insecure: bool,

    #[arg(
        long = "tls-trust-cert-path",
        global = true,
        value_name = "FILE",
        help = "Allow TLS trust cert file path"
    )]
    pub tls_trust_cert_path: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = ArgAction::Count,
        help = "Log more details to stderr, repeat for more"
    )]
    pub verbose: u8,
}

impl CommonArgs {
    /// Builder carrying the flag overrides; unset flags leave the configured
    /// values alone.
    pub fn admin_builder(&self) -> PulsarctlResult<AdminBuilder> {
        let mut builder = AdminBuilder::new();
        if let Some(path) = &self.config {
            builder = builder.config_file(path);
        }
        if let Some(url) = &self.admin_service_url {
            validate_web_service_url(url)?;
            builder = builder.web_service_url(url.trim());
        }
        if let Some(token) = &self.token {
            builder = builder.auth_token(token.trim());
        }
        if self.tls_allow_insecure {
            builder = builder.tls_allow_insecure(true);
        }
        if let Some(path) = &self.tls_trust_cert_path {
            builder = builder.tls_trust_certs_file_path(path);
        }
        Ok(builder)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Operations about namespaces")]
    #[command(name = "namespaces")]
    Namespaces(namespace_commands::NamespaceCommands),

    #[command(about = "Category commands show")]
    Show(ClassificationTablePrint),
}

impl CommandExecute for Commands {
    async fn execute(&self, common: &CommonArgs) -> PulsarctlResult<()> {
        match self {
            Commands::Namespaces(value) => value.execute(common).await,
            Commands::Show(value) => value.execute(common).await,
        }
    }
}

// ================for commands table print================
#[derive(Tabled, Clone)]
struct Command {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Debug, Clone, Parser)]
pub struct ClassificationTablePrint;

impl ClassificationTablePrint {
    /// Table of every registered command
    pub fn render(&self) -> String {
        let commands: Vec<Command> = command_registry::entries()
            .iter()
            .map(|entry| Command {
                category: entry.group,
                command: entry.name,
                remark: entry.about,
            })
            .collect();
        let mut table = Table::new(commands);
        table.with(Style::extended());
        table.to_string()
    }
}

impl CommandExecute for ClassificationTablePrint {
    async fn execute(&self, _common: &CommonArgs) -> PulsarctlResult<()> {
        writeln!(io::stdout(), "{}", self.render())?;
        Ok(())
    }
}
