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

//! Namespace policy payloads exchanged with the admin service.

use serde::Deserialize;
use serde::Serialize;

use crate::utils::size_utils::INFINITE_SIZE;
use crate::utils::time_utils::INFINITE_TIME;

const BYTES_PER_MB: i64 = 1024 * 1024;
const SECONDS_PER_MINUTE: i64 = 60;

/// Retention policy of a namespace.
///
/// Each field is independently `-1` (infinite), `0` (no retention) or a
/// positive quantity. The admin service, not the client, rejects
/// combinations that undercut the backlog quota.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    #[serde(rename = "retentionTimeInMinutes")]
    pub retention_time_in_minutes: i64,

    #[serde(rename = "retentionSizeInMB")]
    pub retention_size_in_mb: i64,
}

impl RetentionPolicy {
    pub fn new(retention_time_in_minutes: i64, retention_size_in_mb: i64) -> Self {
        Self {
            retention_time_in_minutes,
            retention_size_in_mb,
        }
    }

    /// Builds the policy from a parsed byte count and a parsed second count.
    ///
    /// `-1` stays `-1`; everything else truncates to whole minutes and whole
    /// megabytes.
    pub fn from_parsed(size_in_bytes: i64, time_in_seconds: i64) -> Self {
        let retention_time_in_minutes = if time_in_seconds == INFINITE_TIME {
            INFINITE_TIME
        } else {
            time_in_seconds / SECONDS_PER_MINUTE
        };
        let retention_size_in_mb = if size_in_bytes == INFINITE_SIZE {
            INFINITE_SIZE
        } else {
            size_in_bytes / BYTES_PER_MB
        };
        Self::new(retention_time_in_minutes, retention_size_in_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_values_pass_through() {
        assert_eq!(RetentionPolicy::from_parsed(-1, -1), RetentionPolicy::new(-1, -1));
        assert_eq!(RetentionPolicy::from_parsed(-1, 120), RetentionPolicy::new(2, -1));
    }

    #[test]
    fn converts_to_minutes_and_megabytes() {
        assert_eq!(
            RetentionPolicy::from_parsed(1_073_741_824, 6000),
            RetentionPolicy::new(100, 1024)
        );
    }

    #[test]
    fn truncates_partial_units() {
        // 1.5 MB and 119 seconds
        assert_eq!(
            RetentionPolicy::from_parsed(1024 * 1024 + 512 * 1024, 119),
            RetentionPolicy::new(1, 1)
        );
        assert_eq!(RetentionPolicy::from_parsed(1023, 59), RetentionPolicy::new(0, 0));
    }

    #[test]
    fn serializes_with_service_field_names() {
        let json = serde_json::to_string(&RetentionPolicy::new(100, 1024)).unwrap();
        assert_eq!(json, r#"{"retentionTimeInMinutes":100,"retentionSizeInMB":1024}"#);

        let policy: RetentionPolicy =
            serde_json::from_str(r#"{"retentionTimeInMinutes":-1,"retentionSizeInMB":0}"#).unwrap();
        assert_eq!(policy, RetentionPolicy::new(-1, 0));
    }
}
