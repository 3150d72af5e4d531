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
use crate::cli::validators::validate_max_consumers;
use crate::commands::command_descriptor::namespace_errors;
use crate::commands::command_descriptor::CommandDescriptor;
use crate::commands::command_util::CommandUtil;
use crate::core::namespace::NamespaceService;

pub const NAME: &str = "set-max-consumers-per-topic";
pub const ABOUT: &str = "Set the max consumers per topic for a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "This command is used to set the max consumers per topic for a namespace.",
        "This command requires super-user permissions and broker has write policies permission.",
    )
    .example(
        "Set the max consumers per topic for namespace (namespace-name)",
        "pulsarctl namespaces set-max-consumers-per-topic (namespace-name) --size 10",
    )
    .output(
        "normal output",
        "Successfully set the max consumers per topic to 10 for namespace (namespace-name)",
    )
    .output(
        "the max consumers per topic is negative",
        "[✖]  max consumers per topic must be 0 or greater, got -1",
    )
    .outputs(namespace_errors())
}

#[derive(Debug, Clone, Parser)]
pub struct SetMaxConsumersPerTopicSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,

    #[arg(
        long = "size",
        required = true,
        allow_negative_numbers = true,
        help = "max consumers per topic, 0 means unlimited"
    )]
    size: i32,
}

impl SetMaxConsumersPerTopicSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        validate_max_consumers(self.size)?;
        NamespaceService::set_max_consumers_per_topic(admin, &namespace, self.size).await?;
        writeln!(
            out,
            "Successfully set the max consumers per topic to {} for namespace {namespace}",
            self.size
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::PulsarctlError;

    use super::*;
    use crate::admin::mock_namespaces_admin::AdminCall;
    use crate::admin::mock_namespaces_admin::MockNamespacesAdmin;

    fn command(args: &[&str]) -> SetMaxConsumersPerTopicSubCommand {
        SetMaxConsumersPerTopicSubCommand::try_parse_from(std::iter::once(NAME).chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn sets_value_and_confirms() {
        let admin = MockNamespacesAdmin::new();
        let mut out = Vec::new();

        command(&["public/default", "--size", "10"])
            .run(&admin, &mut out)
            .await
            .unwrap();

        assert_eq!(
            admin.calls(),
            vec![AdminCall::SetMaxConsumersPerTopic("public/default".to_string(), 10)]
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Successfully set the max consumers per topic to 10 for namespace public/default\n"
        );
    }

    #[tokio::test]
    async fn negative_value_is_rejected_locally() {
        let admin = MockNamespacesAdmin::new();
        let mut out = Vec::new();

        let err = command(&["public/default", "--size", "-1"])
            .run(&admin, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, PulsarctlError::Argument(_)));
        assert!(admin.calls().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn size_is_required() {
        assert!(SetMaxConsumersPerTopicSubCommand::try_parse_from([NAME, "public/default"]).is_err());
    }
}
