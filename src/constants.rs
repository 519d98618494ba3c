// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the CRD manifest provider.
//!
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Provider Constants
// ============================================================================

/// Terraform provider type name; every resource type name starts with it.
pub const PROVIDER_TYPE_NAME: &str = "k8s";

/// Suffix appended to a resource type name to form its data source type name.
pub const DATA_SOURCE_SUFFIX: &str = "_manifest";

/// Schema version reported for every resource and data source.
pub const SCHEMA_VERSION: i64 = 0;

// ============================================================================
// Attribute Names
// ============================================================================

/// Computed identifier attribute
pub const ATTR_ID: &str = "id";

/// Computed apiVersion attribute
pub const ATTR_API_VERSION: &str = "api_version";

/// Computed kind attribute
pub const ATTR_KIND: &str = "kind";

/// Computed attribute holding the rendered manifest
pub const ATTR_YAML: &str = "yaml";

/// Object metadata block
pub const ATTR_METADATA: &str = "metadata";

/// Resource spec block
pub const ATTR_SPEC: &str = "spec";

// ============================================================================
// OpenAPI Schema Extensions
// ============================================================================

/// Marks a field that accepts either an integer or a string
pub const X_INT_OR_STRING: &str = "x-kubernetes-int-or-string";

/// Marks a field whose content is not pruned by the API server
pub const X_PRESERVE_UNKNOWN_FIELDS: &str = "x-kubernetes-preserve-unknown-fields";

/// CRD scope value for namespaced resources
pub const SCOPE_NAMESPACED: &str = "Namespaced";

// ============================================================================
// Diagnostic Messages
// ============================================================================

/// Summary used when the YAML encoder rejects a resource
pub const DIAG_MARSHAL_SUMMARY: &str = "Unable to marshal resource";

/// Detail prefix used when the YAML encoder rejects a resource
pub const DIAG_MARSHAL_DETAIL: &str = "An unexpected error occurred while marshalling the resource. \
Please report this issue to the provider developers.";

/// Summary used for unknown resource or data source type names
pub const DIAG_UNKNOWN_TYPE_SUMMARY: &str = "Unknown resource type";

/// Summary used for attribute-level conversion failures
pub const DIAG_INVALID_ATTRIBUTE_SUMMARY: &str = "Invalid attribute value";

/// Summary used when the converted spec does not decode into the CRD type
pub const DIAG_INVALID_SPEC_SUMMARY: &str = "Invalid resource spec";

/// Summary used when an imported manifest is rejected
pub const DIAG_IMPORT_SUMMARY: &str = "Unable to import manifest";

/// Summary used when an import leaves server-populated fields out of state
pub const DIAG_IMPORT_DROPPED_SUMMARY: &str = "Manifest fields not imported";

/// Summary used when a CRD schema cannot be mapped
pub const DIAG_SCHEMA_SUMMARY: &str = "Provider schema error";

// ============================================================================
// Import Constants
// ============================================================================

/// Object metadata fields carried in resource state
pub const IMPORTED_METADATA_FIELDS: [&str; 4] = ["name", "namespace", "labels", "annotations"];

/// Root manifest fields the API server populates
pub const SERVER_POPULATED_ROOT_FIELDS: [&str; 1] = ["status"];

/// Suffix appended to int-or-string attribute descriptions
pub const INT_OR_STRING_NOTE: &str = "Numeric strings are rendered as integers.";

// ============================================================================
// Logging Constants
// ============================================================================

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable selecting the log output format
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";

// ============================================================================
// Generator Constants
// ============================================================================

/// Output directory for generated CRD definitions
pub const CRD_OUTPUT_DIR: &str = "deploy/crds";
