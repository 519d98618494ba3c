// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Attribute and type name conventions.
//!
//! Kubernetes manifests use `camelCase` field names while Terraform
//! attributes are `snake_case`. Type names are derived from a CRD's group,
//! kind and version so that every resource in the provider follows the same
//! `k8s_<group>_<kind>_<version>` layout.

use crate::constants::{DATA_SOURCE_SUFFIX, PROVIDER_TYPE_NAME};

/// Convert a `camelCase` manifest field name into a `snake_case` attribute name.
///
/// Acronyms stay together until the last capital before a lowercase letter,
/// so `fromCIDR` becomes `from_cidr` and `toFQDNs` becomes `to_fqd_ns`.
///
/// # Examples
///
/// ```rust
/// use crd_provider::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("secretName"), "secret_name");
/// assert_eq!(to_snake_case("ipv4Address"), "ipv4_address");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '.' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Build the resource type name for a CRD.
///
/// # Examples
///
/// ```rust
/// use crd_provider::naming::resource_type_name;
///
/// assert_eq!(
///     resource_type_name("cert-manager.io", "v1", "ClusterIssuer"),
///     "k8s_cert_manager_io_cluster_issuer_v1"
/// );
/// ```
#[must_use]
pub fn resource_type_name(group: &str, version: &str, kind: &str) -> String {
    let group = group.replace(['.', '-'], "_");
    format!(
        "{PROVIDER_TYPE_NAME}_{group}_{}_{version}",
        to_snake_case(kind)
    )
}

/// Build the data source type name for a resource type name.
#[must_use]
pub fn data_source_type_name(resource_type_name: &str) -> String {
    format!("{resource_type_name}{DATA_SOURCE_SUFFIX}")
}

/// Strip the data source suffix, returning the resource type it renders.
#[must_use]
pub fn resource_for_data_source(data_source_type_name: &str) -> Option<&str> {
    data_source_type_name.strip_suffix(DATA_SOURCE_SUFFIX)
}
