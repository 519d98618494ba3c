// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # crd-provider - Kubernetes CRD manifests as Terraform resources
//!
//! This library exposes Custom Resource Definitions (CRDs) of third-party
//! Kubernetes operators as Terraform-style resources. Each resource renders a
//! YAML manifest into its state; nothing talks to a Kubernetes API server.
//!
//! ## Overview
//!
//! - Every CRD is declared once as a Rust type in [`crd`]
//! - The Terraform schema is derived from the CRD's OpenAPI schema in [`schema`]
//! - Values are mapped between Terraform and manifest form in [`convert`]
//! - Lifecycle handlers live in [`resource`]; the [`provider`] dispatches by type name
//!
//! ## Modules
//!
//! - [`crd`] - CRD types for Capsule, cert-manager, Cilium, Flagger, APISIX, Kong and Kueue
//! - [`naming`] - Attribute and type name conventions
//! - [`schema`] - Terraform schema model
//! - [`convert`] - Schema-guided value conversion
//! - [`resource`] - Create, Read, Update, Delete, Import and data source handlers
//! - [`provider`] - Registry and dispatch returning diagnostics
//! - [`errors`] and [`diagnostics`] - Error types and framework-facing diagnostics
//! - [`config`] - Logging configuration
//!
//! ## Example
//!
//! ```rust
//! use crd_provider::provider::Provider;
//! use serde_json::json;
//!
//! let provider = Provider::new().unwrap();
//! let response = provider.create(
//!     "k8s_cert_manager_io_certificate_v1",
//!     json!({
//!         "metadata": { "name": "example-com", "namespace": "default" },
//!         "spec": {
//!             "secret_name": "example-com-tls",
//!             "issuer_ref": { "name": "letsencrypt", "kind": "ClusterIssuer" },
//!             "dns_names": ["example.com", "www.example.com"]
//!         }
//!     }),
//! );
//!
//! let state = response.new_state.unwrap();
//! let yaml = state["yaml"].as_str().unwrap();
//! assert!(yaml.contains("kind: Certificate"));
//! assert!(yaml.contains("secretName: example-com-tls"));
//! ```

pub mod config;
pub mod constants;
pub mod convert;
pub mod crd;
pub mod crd_docs;
pub mod crd_export;
pub mod diagnostics;
pub mod errors;
pub mod input;
pub mod naming;
pub mod provider;
pub mod resource;
pub mod resource_impls;
pub mod schema;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod crd_tests;
#[cfg(test)]
mod naming_tests;
#[cfg(test)]
mod provider_tests;
#[cfg(test)]
mod resource_tests;
