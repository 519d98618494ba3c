// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRD definition export.
//!
//! Writes the CustomResourceDefinitions implied by the Rust types, so the
//! rendered manifests can be checked against a cluster with the same schema
//! (`kubectl apply --dry-run=server`).

use crate::provider::Provider;
use anyhow::{Context, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const GENERATED_HEADER: &str = "# This file is AUTO-GENERATED from the CRD types
# DO NOT EDIT MANUALLY - Run `cargo run --bin crdgen` to regenerate
#
";

/// File name for a CRD: `<plural>.<group>.crd.yaml`.
#[must_use]
pub fn crd_file_name(crd: &CustomResourceDefinition) -> String {
    format!("{}.{}.crd.yaml", crd.spec.names.plural, crd.spec.group)
}

/// Render a CRD as YAML with the generated-file header.
///
/// # Errors
///
/// Returns an error if the CRD cannot be serialized.
pub fn render_crd(crd: &CustomResourceDefinition) -> Result<String> {
    let yaml = serde_yaml::to_string(crd)
        .with_context(|| format!("Failed to serialize CRD {}", crd.spec.names.kind))?;
    Ok(format!("{GENERATED_HEADER}{yaml}"))
}

/// Write every registered CRD into `output_dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be written.
pub fn write_crds(provider: &Provider, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = Vec::new();
    for handler in provider.handlers() {
        let crd = handler.crd();
        let path = output_dir.join(crd_file_name(&crd));
        fs::write(&path, render_crd(&crd)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated {}", path.display());
        written.push(path);
    }

    Ok(written)
}
