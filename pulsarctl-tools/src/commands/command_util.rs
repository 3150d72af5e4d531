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

use pulsarctl_common::common::naming::NamespaceName;
use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;

pub const NAME_ARG_ERROR: &str = "the namespace name is not specified or the namespace name is specified more than one";

pub struct CommandUtil;

impl CommandUtil {
    /// Parses the only positional name of a namespace command.
    ///
    /// Zero or several names fail with [`NAME_ARG_ERROR`].
    pub fn single_namespace_name(names: &[String]) -> PulsarctlResult<NamespaceName> {
        match names {
            [name] => name.parse(),
            _ => Err(PulsarctlError::argument(NAME_ARG_ERROR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn accepts_exactly_one_name() {
        let namespace = CommandUtil::single_namespace_name(&names(&["public/default"])).unwrap();
        assert_eq!(namespace.to_string(), "public/default");
    }

    #[test]
    fn rejects_zero_or_many_names() {
        for args in [names(&[]), names(&["a/b", "c/d"])] {
            match CommandUtil::single_namespace_name(&args) {
                Err(PulsarctlError::Argument(message)) => assert_eq!(message, NAME_ARG_ERROR),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_malformed_name() {
        assert!(matches!(
            CommandUtil::single_namespace_name(&names(&["no-slash"])),
            Err(PulsarctlError::Argument(_))
        ));
    }
}
