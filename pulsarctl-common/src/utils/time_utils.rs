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

//! Relative time strings such as `100m`, `3h` or `2d`.

use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;

/// Sentinel for "no time limit", passed through unchanged to the admin service.
pub const INFINITE_TIME: i64 = -1;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Parses `<integer><s|m|h|d|w>` (unit case-insensitive) into seconds.
///
/// `-1` yields [`INFINITE_TIME`] and a bare `0` yields `0`; every other value
/// needs a unit.
///
/// ```
/// use pulsarctl_common::TimeUtils::parse_relative_time_in_seconds;
///
/// assert_eq!(parse_relative_time_in_seconds("100m").unwrap(), 6000);
/// assert_eq!(parse_relative_time_in_seconds("-1").unwrap(), -1);
/// ```
pub fn parse_relative_time_in_seconds(value: &str) -> PulsarctlResult<i64> {
    let trimmed = value.trim();
    match trimmed {
        "" => return Err(PulsarctlError::invalid_format(value, "time can not be empty")),
        "-1" => return Ok(INFINITE_TIME),
        "0" => return Ok(0),
        _ => {}
    }

    let Some(unit) = trimmed.chars().last() else {
        return Err(PulsarctlError::invalid_format(value, "time can not be empty"));
    };
    let seconds_per_unit = match unit.to_ascii_lowercase() {
        's' => 1,
        'm' => SECONDS_PER_MINUTE,
        'h' => SECONDS_PER_HOUR,
        'd' => SECONDS_PER_DAY,
        'w' => SECONDS_PER_WEEK,
        u if u.is_ascii_digit() => {
            return Err(PulsarctlError::invalid_format(
                value,
                "missing time unit, expected one of s, m, h, d, w",
            ))
        }
        u => return Err(PulsarctlError::invalid_format(value, format!("invalid time unit '{u}'"))),
    };

    let number = &trimmed[..trimmed.len() - unit.len_utf8()];
    if number.starts_with('-') {
        return Err(PulsarctlError::invalid_format(
            value,
            "negative times are not allowed, use -1 for infinite time",
        ));
    }
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PulsarctlError::invalid_format(value, format!("invalid time '{number}'")));
    }
    number
        .parse::<i64>()
        .ok()
        .and_then(|count| count.checked_mul(seconds_per_unit))
        .ok_or_else(|| PulsarctlError::invalid_format(value, "time is too large"))
}
