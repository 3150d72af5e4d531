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

//! # Pulsarctl Error Handling
//!
//! One error enum for every crate of the workspace. Command handlers return
//! [`PulsarctlResult`] and never render errors themselves; the CLI entry point
//! prints the error and maps it to a non-zero exit status.
//!
//! ```rust
//! use pulsarctl_error::PulsarctlError;
//! use pulsarctl_error::PulsarctlResult;
//!
//! fn single_name(args: &[String]) -> PulsarctlResult<&str> {
//!     match args {
//!         [name] => Ok(name.as_str()),
//!         _ => Err(PulsarctlError::argument("expected exactly one name")),
//!     }
//! }
//! # assert!(single_name(&[]).is_err());
//! ```

pub mod unified;

pub use unified::AdminError;
pub use unified::PulsarctlError;
pub use unified::PulsarctlResult;
