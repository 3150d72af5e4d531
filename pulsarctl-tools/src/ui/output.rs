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

//! Colored messages on stderr

use colored::Colorize;

/// Renders an error the way it is shown to the user
pub fn format_error(message: &str) -> String {
    format!("{}  {}", "[✖]".red().bold(), message)
}

/// Print error message with red cross
pub fn print_error(message: &str) {
    eprintln!("{}", format_error(message));
}
