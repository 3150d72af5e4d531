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

//! CLI input validators
//!
//! Provides validation for command-line arguments

use crate::core::PulsarctlError;
use crate::core::PulsarctlResult;

/// Validate the max consumers per topic value
///
/// `0` means unlimited; negative values are rejected.
pub fn validate_max_consumers(max_consumers: i32) -> PulsarctlResult<()> {
    if max_consumers < 0 {
        return Err(PulsarctlError::argument(format!(
            "max consumers per topic must be 0 or greater, got {max_consumers}"
        )));
    }
    Ok(())
}

/// Validate the message TTL, in seconds
pub fn validate_message_ttl(ttl_in_seconds: i32) -> PulsarctlResult<()> {
    if ttl_in_seconds < 0 {
        return Err(PulsarctlError::argument(format!(
            "message TTL must be 0 or greater, got {ttl_in_seconds}"
        )));
    }
    Ok(())
}

/// Validate the admin service URL given on the command line
///
/// # Format
/// `http://host:port` or `https://host:port`
pub fn validate_web_service_url(url: &str) -> PulsarctlResult<()> {
    let url = url.trim();
    let Some(rest) = url.strip_prefix("http://").or_else(|| url.strip_prefix("https://")) else {
        return Err(PulsarctlError::argument(format!(
            "Invalid admin service url '{url}', expected 'http://host:port' or 'https://host:port'"
        )));
    };
    if rest.is_empty() || rest.starts_with('/') {
        return Err(PulsarctlError::argument(format!(
            "Invalid admin service url '{url}', the host is missing"
        )));
    }
    Ok(())
}
