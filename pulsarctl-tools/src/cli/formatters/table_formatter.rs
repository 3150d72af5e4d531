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

//! Table formatter
//!
//! Objects become a two-column key/value table. Anything else is printed as
//! a single value.

use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::Formatter;

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format<T: Serialize>(&self, data: &T) -> String {
        match serde_json::to_value(data) {
            Ok(Value::Object(map)) => {
                let mut builder = Builder::default();
                builder.push_record(["Key", "Value"]);
                for (key, value) in map {
                    builder.push_record([key, cell(&value)]);
                }
                let mut table = builder.build();
                table.with(Style::extended());
                table.to_string()
            }
            Ok(other) => cell(&other),
            Err(e) => format!("error: failed to format as table: {e}"),
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
