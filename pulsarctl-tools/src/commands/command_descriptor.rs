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

//! Long help text of a command
//!
//! A [`CommandDescriptor`] records what a command is for, the permission it
//! needs, worked examples and the outputs a user can expect. The registry
//! renders it into the clap help of the command.

use std::fmt::Write;

use crate::commands::command_util::NAME_ARG_ERROR;

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub desc: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub desc: String,
    pub out: String,
}

impl Output {
    pub fn new(desc: impl Into<String>, out: impl Into<String>) -> Self {
        Self {
            desc: desc.into(),
            out: out.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    used_for: String,
    permission: String,
    examples: Vec<Example>,
    outputs: Vec<Output>,
}

impl CommandDescriptor {
    pub fn new(used_for: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            used_for: used_for.into(),
            permission: permission.into(),
            examples: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn example(mut self, desc: impl Into<String>, command: impl Into<String>) -> Self {
        self.examples.push(Example {
            desc: desc.into(),
            command: command.into(),
        });
        self
    }

    pub fn output(mut self, desc: impl Into<String>, out: impl Into<String>) -> Self {
        self.outputs.push(Output::new(desc, out));
        self
    }

    pub fn outputs(mut self, outputs: impl IntoIterator<Item = Output>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn output_list(&self) -> &[Output] {
        &self.outputs
    }

    /// Renders the `USED FOR`, `REQUIRED PERMISSION` and `OUTPUT` sections.
    pub fn long_about(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "USED FOR:\n{INDENT}{}\n", self.used_for);
        let _ = writeln!(text, "REQUIRED PERMISSION:\n{INDENT}{}\n", self.permission);
        text.push_str("OUTPUT:\n");
        let outputs: Vec<String> = self
            .outputs
            .iter()
            .map(|output| format!("{INDENT}#{}\n{INDENT}{}", output.desc, output.out))
            .collect();
        text.push_str(&outputs.join("\n\n"));
        text
    }

    /// Renders the `EXAMPLES` section.
    pub fn examples_text(&self) -> String {
        let examples: Vec<String> = self
            .examples
            .iter()
            .map(|example| format!("{INDENT}#{}\n{INDENT}{}", example.desc, example.command))
            .collect();
        format!("EXAMPLES:\n{}", examples.join("\n\n"))
    }
}

/// Output shown when the name argument is missing or repeated
pub fn arg_error() -> Output {
    Output::new(
        "you must specify a tenant/namespace name, please check if the tenant/namespace name is provided",
        format!("[✖]  {NAME_ARG_ERROR}"),
    )
}

pub fn tenant_not_exist_error() -> Output {
    Output::new("the tenant does not exist", "[✖]  code: 404 reason: Tenant does not exist")
}

pub fn namespace_not_exist_error() -> Output {
    Output::new(
        "the namespace does not exist",
        "[✖]  code: 404 reason: Namespace (tenant/namespace) does not exist",
    )
}

/// Failure outputs shared by every namespace command
pub fn namespace_errors() -> [Output; 3] {
    [arg_error(), tenant_not_exist_error(), namespace_not_exist_error()]
}
