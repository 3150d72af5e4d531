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

//! Pulsarctl Tools - namespace administration for Apache Pulsar
//!
//! This crate provides both:
//! - **Core**: Reusable business logic for namespace policy operations
//! - **CLI**: Command-line interface with formatting and validation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      CLI Layer (bin/, commands/)        │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - Client configuration (AdminBuilder)  │
//! │  - Namespace policy operations          │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Admin API (admin/)               │
//! │  - NamespacesAdmin trait                │
//! │  - DefaultPulsarAdmin (HTTP)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library (using core)
//!
//! ```rust,ignore
//! use pulsarctl_tools::core::admin::AdminBuilder;
//! use pulsarctl_tools::core::namespace::NamespaceService;
//!
//! let admin = AdminBuilder::new()
//!     .web_service_url("http://localhost:8080")
//!     .build()?;
//!
//! let namespace = "public/default".parse()?;
//! let policy = NamespaceService::set_retention(&admin, &namespace, "100m", "1G").await?;
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! pulsarctl namespaces set-retention public/default --time 100m --size 1G
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Independent of any presentation layer: no printing, no clap types.
    //!
    //! - [`admin`] - Admin client builder
    //! - [`namespace`] - Namespace policy operations

    pub mod admin;
    pub mod namespace;

    // Re-export error types from pulsarctl-error
    pub use pulsarctl_error::AdminError;
    pub use pulsarctl_error::PulsarctlError;
    pub use pulsarctl_error::PulsarctlResult;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (JSON, YAML, Table)
    //! - [`validators`] - Input validators

    pub mod formatters;
    pub mod validators;
}

// Terminal output helpers
pub mod ui;

// Admin API layer
pub mod admin;

// Command definitions, descriptors and handlers
pub mod commands;

// CLI entry point
pub mod pulsarctl_cli;
