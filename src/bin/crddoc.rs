// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resource Markdown Documentation Generator
//!
//! Generates the markdown reference of every resource's Terraform schema.
//!
//! Usage:
//!   cargo run --bin crddoc > docs/resources.md

use anyhow::Result;
use crd_provider::{crd_docs::render_reference, provider::Provider};

fn main() -> Result<()> {
    let provider = Provider::new()?;
    println!("{}", render_reference(&provider));
    Ok(())
}
