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

use std::fmt;
use std::str::FromStr;

/// Initializes the logger.
///
/// The level comes from the `RUST_LOG` environment variable and defaults to
/// `WARN`. Logs go to stderr so command output on stdout stays scriptable.
/// An unparsable `RUST_LOG` falls back to the default.
pub fn init_logger() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| tracing::Level::from_str(value.trim()).ok())
        .unwrap_or(tracing::Level::WARN);
    install(level);
}

pub fn init_logger_with_level(level: Level) {
    install(level.into());
}

fn install(level: tracing::Level) {
    // try_init: a second initialisation (tests, embedding) is not an error
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .with_line_number(true)
        .with_max_level(level)
        .try_init();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Level(&'static str);

impl Level {
    pub const ERROR: Level = Level("ERROR");

    pub const WARN: Level = Level("WARN");

    pub const INFO: Level = Level("INFO");

    pub const DEBUG: Level = Level("DEBUG");

    pub const TRACE: Level = Level("TRACE");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Level selected by a repeated `-v` flag: 0 keeps the default.
    pub fn from_verbosity(occurrences: u8) -> Option<Level> {
        match occurrences {
            0 => None,
            1 => Some(Level::INFO),
            2 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level.0 {
            "ERROR" => tracing::Level::ERROR,
            "INFO" => tracing::Level::INFO,
            "DEBUG" => tracing::Level::DEBUG,
            "TRACE" => tracing::Level::TRACE,
            _ => tracing::Level::WARN,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}
