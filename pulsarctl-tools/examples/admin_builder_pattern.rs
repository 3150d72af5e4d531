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

//! Example: Using the admin builder against a running cluster
//!
//! Expects an admin service on `http://localhost:8080`, or the URL in
//! `PULSARCTL_WEB_SERVICE_URL`.

use pulsarctl_common::common::naming::NamespaceName;
use pulsarctl_tools::core::admin::create_admin;
use pulsarctl_tools::core::admin::AdminBuilder;
use pulsarctl_tools::core::namespace::NamespaceService;
use pulsarctl_tools::core::PulsarctlResult;

/// Example 1: Simple usage with helper function
async fn example_simple() -> PulsarctlResult<()> {
    println!("=== Example 1: Simple Usage ===");

    let admin = create_admin("http://localhost:8080")?;
    let namespace: NamespaceName = "public/default".parse()?;

    match NamespaceService::get_retention(&admin, &namespace).await? {
        Some(policy) => println!("Retention of {namespace}: {policy:?}"),
        None => println!("Retention of {namespace} is not set"),
    }
    Ok(())
}

/// Example 2: Builder pattern, layered over the environment
async fn example_builder() -> PulsarctlResult<()> {
    println!("\n=== Example 2: Builder Pattern ===");

    let admin = AdminBuilder::new().timeout_millis(5000).build()?;
    let namespace: NamespaceName = "public/default".parse()?;

    let policy = NamespaceService::set_retention(&admin, &namespace, "3h", "512M").await?;
    println!(
        "Retention of {namespace} set to {} min / {} MB",
        policy.retention_time_in_minutes, policy.retention_size_in_mb
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = example_simple().await {
        eprintln!("Example 1 failed: {e}");
    }
    if let Err(e) = example_builder().await {
        eprintln!("Example 2 failed: {e}");
    }
}
