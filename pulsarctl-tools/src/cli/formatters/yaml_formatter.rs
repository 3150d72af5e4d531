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

//! YAML formatter

use serde::Serialize;

use super::Formatter;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format<T: Serialize>(&self, data: &T) -> String {
        serde_yaml::to_string(data)
            .map(|yaml| yaml.trim_end().to_string())
            .unwrap_or_else(|e| format!("error: failed to format as YAML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use pulsarctl_common::common::policies::RetentionPolicy;

    use super::*;

    #[test]
    fn test_yaml_formatter() {
        let output = YamlFormatter.format(&RetentionPolicy::new(100, 1024));
        assert_eq!(output, "retentionTimeInMinutes: 100\nretentionSizeInMB: 1024");
    }
}
