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

//! Human readable size strings such as `16M`, `1G` or `-1`.

use pulsarctl_error::PulsarctlError;
use pulsarctl_error::PulsarctlResult;

/// Sentinel for "no limit", passed through unchanged to the admin service.
pub const INFINITE_SIZE: i64 = -1;

const KB: i64 = 1024;
const MB: i64 = KB * 1024;
const GB: i64 = MB * 1024;
const TB: i64 = GB * 1024;

/// Parses `<integer>[K|M|G|T]` (unit case-insensitive) into a byte count.
///
/// The literal `-1` yields [`INFINITE_SIZE`]. Without a unit the number is a
/// raw byte count. Any other negative value is rejected.
///
/// ```
/// use pulsarctl_common::SizeUtils::parse_size;
///
/// assert_eq!(parse_size("1G").unwrap(), 1_073_741_824);
/// assert_eq!(parse_size("-1").unwrap(), -1);
/// assert!(parse_size("abc").is_err());
/// ```
pub fn parse_size(value: &str) -> PulsarctlResult<i64> {
    let trimmed = value.trim();
    if trimmed == "-1" {
        return Ok(INFINITE_SIZE);
    }
    let (number, multiplier) = match trimmed.chars().last() {
        None => return Err(PulsarctlError::invalid_format(value, "size can not be empty")),
        Some(unit) if unit.is_ascii_alphabetic() => {
            let multiplier = unit_multiplier(unit)
                .ok_or_else(|| PulsarctlError::invalid_format(value, format!("unknown size unit '{unit}'")))?;
            (&trimmed[..trimmed.len() - 1], multiplier)
        }
        Some(_) => (trimmed, 1),
    };

    let count = parse_count(value, number)?;
    count
        .checked_mul(multiplier)
        .ok_or_else(|| PulsarctlError::invalid_format(value, "size is too large"))
}

fn unit_multiplier(unit: char) -> Option<i64> {
    match unit.to_ascii_uppercase() {
        'K' => Some(KB),
        'M' => Some(MB),
        'G' => Some(GB),
        'T' => Some(TB),
        _ => None,
    }
}

fn parse_count(value: &str, number: &str) -> PulsarctlResult<i64> {
    if number.starts_with('-') {
        return Err(PulsarctlError::invalid_format(
            value,
            "negative sizes are not allowed, use -1 for infinite size",
        ));
    }
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PulsarctlError::invalid_format(
            value,
            "expected <integer>[K|M|G|T], e.g. 10M, 16G, 3T",
        ));
    }
    number
        .parse::<i64>()
        .map_err(|e| PulsarctlError::invalid_format(value, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sentinels() {
        assert_eq!(parse_size("-1").unwrap(), -1);
        assert_eq!(parse_size("0").unwrap(), 0);
        assert_eq!(parse_size(" -1 ").unwrap(), -1);
    }

    #[test]
    fn parses_units() {
        assert_eq!(parse_size("512").unwrap(), 512);
        assert_eq!(parse_size("10k").unwrap(), 10 * 1024);
        assert_eq!(parse_size("16M").unwrap(), 16 * 1024 * 1024);
        assert_eq!(parse_size("1G").unwrap(), 1_073_741_824);
        assert_eq!(parse_size("1g").unwrap(), 1_073_741_824);
        assert_eq!(parse_size("3T").unwrap(), 3 * 1024_i64.pow(4));
    }

    #[test]
    fn reparsing_the_byte_count_is_stable() {
        for input in ["0", "1K", "16M", "1G", "3T", "-1"] {
            let bytes = parse_size(input).unwrap();
            assert_eq!(parse_size(&bytes.to_string()).unwrap(), bytes);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "abc", "G", "1X", "1.5G", "+1G", "1 G", "--1"] {
            let err = parse_size(input).unwrap_err();
            assert!(
                matches!(err, PulsarctlError::InvalidFormat { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_negative_values_other_than_infinite() {
        assert!(matches!(parse_size("-5"), Err(PulsarctlError::InvalidFormat { .. })));
        assert!(matches!(parse_size("-1G"), Err(PulsarctlError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_overflow() {
        let err = parse_size("9999999999T").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
