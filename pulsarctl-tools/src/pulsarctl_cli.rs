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

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use clap_complete::generate;
use clap_complete::Shell;
use pulsarctl_common::log::init_logger;
use pulsarctl_common::log::init_logger_with_level;
use pulsarctl_common::log::Level;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;
use tracing::debug;

use crate::commands::command_registry;
use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::commands::CommonArgs;
use crate::ui::output::print_error;

const BIN_NAME: &str = "pulsarctl";

#[derive(Debug, Parser)]
#[command(name = "pulsarctl")]
#[command(about = "a CLI for Apache Pulsar namespace administration", version, long_about = None)]
pub struct PulsarCli {
    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completion script (bash, zsh, fish, ...)"
    )]
    completion: Option<Shell>,

    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl PulsarCli {
    /// The clap command tree with the long help of every registered command
    pub fn command_tree() -> clap::Command {
        command_registry::decorate(Self::command())
    }

    pub fn try_parse_decorated_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_tree().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Parses the process arguments, exiting with clap's usage error on failure.
    pub fn parse_from_env() -> Self {
        let matches = Self::command_tree().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    pub fn common(&self) -> &CommonArgs {
        &self.common
    }

    pub fn commands(&self) -> Option<&Commands> {
        self.commands.as_ref()
    }

    /// Runs the command line and maps the outcome to the process exit status.
    pub async fn handle(&self) -> ExitCode {
        match Level::from_verbosity(self.common.verbose) {
            Some(level) => init_logger_with_level(level),
            None => init_logger(),
        }

        match self.run().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                debug!(local = e.is_local(), error = ?e, "command failed");
                print_error(&e.to_string());
                ExitCode::FAILURE
            }
        }
    }

    async fn run(&self) -> PulsarctlResult<()> {
        if let Some(shell) = self.completion {
            let mut cmd = Self::command_tree();
            generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
            return Ok(());
        }

        match &self.commands {
            Some(commands) => commands.execute(&self.common).await,
            None => Err(PulsarctlError::argument(
                "No command specified. Use --help for usage information.",
            )),
        }
    }
}
