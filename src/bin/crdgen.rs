// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRD YAML Generator
//!
//! Generates Kubernetes CRD YAML files from the Rust types in src/crd/.
//! Applying them to a test cluster lets rendered manifests be checked with
//! `kubectl apply --dry-run=server`.
//!
//! Usage:
//!   cargo run --bin crdgen [OUTPUT_DIR]
//!
//! Generated files are written to deploy/crds/ unless another directory is given.

use anyhow::Result;
use crd_provider::{constants::CRD_OUTPUT_DIR, crd_export::write_crds, provider::Provider};
use std::path::PathBuf;

fn main() -> Result<()> {
    let output_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(CRD_OUTPUT_DIR), PathBuf::from);

    println!("Generating CRD YAML files from src/crd/...");

    let provider = Provider::new()?;
    for path in write_crds(&provider, &output_dir)? {
        println!("  ✓ Generated {}", path.display());
    }

    println!("✓ Successfully generated CRD YAML files in {}", output_dir.display());
    println!("\nNext steps:");
    println!("  1. Review the generated files");
    println!("  2. Install into a test cluster with: kubectl apply -f {}", output_dir.display());

    Ok(())
}
