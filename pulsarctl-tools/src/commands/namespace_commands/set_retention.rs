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

pub const NAME: &str = "set-retention";
pub const ABOUT: &str = "Set the retention policy for a namespace";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "Set the retention policy for a namespace",
        "This command requires tenant admin permissions.",
    )
    .example(
        "Set the retention policy for a namespace",
        "pulsarctl namespaces set-retention tenant/namespace --time 100m --size 1G",
    )
    .example(
        "Set the infinite time retention policy for a namespace",
        "pulsarctl namespaces set-retention tenant/namespace --time -1 --size 10G",
    )
    .output(
        "normal output",
        "Set retention successfully for [tenant/namespace]. The retention policy is: time = 100 min, size = 1024 MB",
    )
    .outputs(namespace_errors())
    .output(
        "Retention Quota must exceed configured backlog quota for namespace",
        "[✖]  code: 412 reason: Retention Quota must exceed configured backlog quota for namespace.",
    )
}

#[derive(Debug, Clone, Parser)]
pub struct SetRetentionSubCommand {
    #[arg(value_name = "tenant/namespace", help = "Name of the namespace")]
    names: Vec<String>,

    #[arg(
        long = "time",
        required = true,
        allow_hyphen_values = true,
        help = "Retention time with a unit (eg: 100m, 3h, 2d, 5w). 0 means no retention and -1 means infinite time \
                retention"
    )]
    time: String,

    #[arg(
        long = "size",
        required = true,
        allow_hyphen_values = true,
        help = "Retention size limit (eg: 10M, 16G, 3T). 0 or less than 1MB means no retention and -1 means \
                infinite size retention"
    )]
    size: String,
}

impl SetRetentionSubCommand {
    pub async fn run<A: NamespacesAdmin, W: Write>(&self, admin: &A, out: &mut W) -> PulsarctlResult<()> {
        let namespace = CommandUtil::single_namespace_name(&self.names)?;
        let policy = NamespaceService::set_retention(admin, &namespace, &self.time, &self.size).await?;
        writeln!(
            out,
            "Set retention successfully for [{namespace}]. The retention policy is: time = {} min, size = {} MB",
            policy.retention_time_in_minutes, policy.retention_size_in_mb
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_common::common::policies::RetentionPolicy;
    use pulsarctl_error::AdminError;
    use pulsarctl_error::PulsarctlError;

    use super::*;
    use crate::admin::mock_namespaces_admin::AdminCall;
    use crate::admin::mock_namespaces_admin::MockNamespacesAdmin;

    fn command(args: &[&str]) -> SetRetentionSubCommand {
        SetRetentionSubCommand::try_parse_from(std::iter::once(NAME).chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn sets_normalised_policy_and_confirms() {
        let admin = MockNamespacesAdmin::new();
        let mut out = Vec::new();

        command(&["tenant/ns", "--time", "100m", "--size", "1G"])
            .run(&admin, &mut out)
            .await
            .unwrap();

        assert_eq!(
            admin.calls(),
            vec![AdminCall::SetRetention("tenant/ns".to_string(), RetentionPolicy::new(100, 1024))]
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Set retention successfully for [tenant/ns]. The retention policy is: time = 100 min, size = 1024 MB\n"
        );
    }

    #[tokio::test]
    async fn keeps_infinite_sentinels() {
        let admin = MockNamespacesAdmin::new();
        let mut out = Vec::new();

        command(&["tenant/ns", "--time", "-1", "--size", "-1"])
            .run(&admin, &mut out)
            .await
            .unwrap();

        assert_eq!(
            admin.calls(),
            vec![AdminCall::SetRetention("tenant/ns".to_string(), RetentionPolicy::new(-1, -1))]
        );
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("time = -1 min, size = -1 MB\n"));
    }

    #[tokio::test]
    async fn malformed_values_fail_before_calling_admin() {
        let admin = MockNamespacesAdmin::new();
        for (time, size) in [("100m", "abc"), ("xyz", "1G"), ("-5m", "1G"), ("1h", "-2M")] {
            let mut out = Vec::new();
            let err = command(&["tenant/ns", "--time", time, "--size", size])
                .run(&admin, &mut out)
                .await
                .unwrap_err();
            assert!(matches!(err, PulsarctlError::InvalidFormat { .. }), "{time} {size}: {err:?}");
            assert!(out.is_empty());
        }
        assert!(admin.calls().is_empty());
    }

    #[tokio::test]
    async fn backlog_quota_rejection_is_surfaced() {
        let admin = MockNamespacesAdmin::failing(AdminError::remote(
            412,
            "Retention Quota must exceed configured backlog quota for namespace.",
        ));
        let mut out = Vec::new();

        let err = command(&["tenant/ns", "--time", "1m", "--size", "1M"])
            .run(&admin, &mut out)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "code: 412 reason: Retention Quota must exceed configured backlog quota for namespace."
        );
        assert!(out.is_empty());
    }

    #[test]
    fn time_and_size_are_required() {
        assert!(SetRetentionSubCommand::try_parse_from([NAME, "tenant/ns", "--time", "1h"]).is_err());
        assert!(SetRetentionSubCommand::try_parse_from([NAME, "tenant/ns", "--size", "1G"]).is_err());
    }
}
