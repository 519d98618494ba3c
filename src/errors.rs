// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the provider.
//!
//! This module provides the error type returned by schema derivation, value
//! conversion and the lifecycle handlers. Errors are turned into framework
//! diagnostics by [`crate::diagnostics`].

use thiserror::Error;

/// Errors that can occur while rendering, importing or describing a resource.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No resource or data source is registered under the given type name
    #[error("Resource type '{type_name}' is not supported by this provider")]
    UnknownResourceType {
        /// The requested type name
        type_name: String,
    },

    /// An attribute was set that the schema does not declare
    #[error("Unknown attribute '{path}'")]
    UnknownAttribute {
        /// Dotted path of the offending attribute
        path: String,
    },

    /// A required attribute is absent or null
    #[error("Missing required attribute '{path}'")]
    MissingRequiredAttribute {
        /// Dotted path of the missing attribute
        path: String,
    },

    /// An attribute value does not match its declared type
    #[error("Attribute '{path}' expected {expected}, got {found}")]
    TypeMismatch {
        /// Dotted path of the attribute
        path: String,
        /// The type the schema declares
        expected: String,
        /// The JSON type that was supplied
        found: String,
    },

    /// The converted spec does not decode into the CRD's Rust type
    ///
    /// Returned when enum values or nested shapes are rejected by the typed model.
    #[error("Invalid spec for {type_name}: {source}")]
    InvalidSpec {
        /// Resource type name
        type_name: String,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The prior state or plan could not be decoded into a resource model
    #[error("Invalid state for {type_name}: {source}")]
    InvalidState {
        /// Resource type name
        type_name: String,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The YAML encoder or decoder rejected a document
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An imported manifest is not valid YAML
    #[error("Invalid manifest: {0}")]
    InvalidManifest(#[source] serde_yaml::Error),

    /// An imported manifest names a different apiVersion or kind
    #[error("Manifest is {found}, expected {expected}")]
    ManifestKindMismatch {
        /// `apiVersion/kind` of the resource type
        expected: String,
        /// `apiVersion/kind` found in the manifest
        found: String,
    },

    /// The CRD schema could not be turned into a Terraform schema
    #[error("Failed to derive schema for {type_name}: {reason}")]
    SchemaGeneration {
        /// Resource type name
        type_name: String,
        /// Explanation of what could not be mapped
        reason: String,
    },
}

impl ProviderError {
    /// Attribute path the error refers to, if any.
    #[must_use]
    pub fn attribute_path(&self) -> Option<&str> {
        match self {
            Self::UnknownAttribute { path }
            | Self::MissingRequiredAttribute { path }
            | Self::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}
