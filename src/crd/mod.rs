// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definitions (CRDs) of third-party operators.
//!
//! Every type in this module is declared exactly once and serves as the
//! single source for both representations the provider needs: the YAML
//! manifest (through `serde`) and the Terraform schema (through the CRD's
//! OpenAPI v3 schema generated from `schemars`).
//!
//! # Resource Types
//!
//! ## Tenancy
//!
//! - [`capsule::Tenant`] - Capsule multi-tenancy boundary
//!
//! ## Certificates
//!
//! - [`cert_manager::Certificate`] - X.509 certificate request
//! - [`cert_manager::Issuer`] - Namespaced certificate issuer
//! - [`cert_manager::ClusterIssuer`] - Cluster-wide certificate issuer
//!
//! ## Network Policy
//!
//! - [`cilium::CiliumNetworkPolicy`] - L3-L7 network policy
//!
//! ## Progressive Delivery
//!
//! - [`flagger::Canary`] - Canary release analysis
//!
//! ## API Gateways
//!
//! - [`apisix::ApisixRoute`] - APISIX HTTP and stream routes
//! - [`kong::KongUpstreamPolicy`] - Kong upstream load-balancing policy
//!
//! ## Scheduling
//!
//! - [`kueue::ResourceFlavor`] - Kueue node flavor with labels, taints and tolerations
//!
//! # Example
//!
//! ```rust
//! use crd_provider::crd::cert_manager::{CertificateSpec, IssuerReference};
//!
//! let spec = CertificateSpec {
//!     secret_name: "example-com-tls".to_string(),
//!     issuer_ref: IssuerReference {
//!         name: "letsencrypt".to_string(),
//!         kind: Some("ClusterIssuer".to_string()),
//!         group: None,
//!     },
//!     dns_names: Some(vec!["example.com".to_string()]),
//!     ..CertificateSpec::default()
//! };
//! assert_eq!(spec.secret_name, "example-com-tls");
//! ```

pub mod apisix;
pub mod capsule;
pub mod cert_manager;
pub mod cilium;
pub mod flagger;
pub mod kong;
pub mod kueue;

use schemars::{json_schema, Schema, SchemaGenerator};

/// Schema for operator-defined, free-form configuration objects.
///
/// The API server keeps these fields verbatim, so the provider passes them
/// through without renaming keys.
pub(crate) fn free_form_object(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "nullable": true,
        "x-kubernetes-preserve-unknown-fields": true
    })
}
