// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Framework-facing diagnostics.
//!
//! Handlers never fail with a Rust error at the provider boundary. Every
//! [`ProviderError`] is converted into a [`Diagnostic`] carried by a
//! [`Response`], the same way plugin frameworks attach diagnostics to
//! responses.

use crate::constants::{
    DIAG_IMPORT_SUMMARY, DIAG_INVALID_ATTRIBUTE_SUMMARY, DIAG_INVALID_SPEC_SUMMARY,
    DIAG_MARSHAL_DETAIL, DIAG_MARSHAL_SUMMARY, DIAG_SCHEMA_SUMMARY, DIAG_UNKNOWN_TYPE_SUMMARY,
};
use crate::errors::ProviderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Diagnostic severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic returned alongside (or instead of) new state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Dotted attribute path the diagnostic is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    #[must_use]
    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, path: impl Into<String>) -> Self {
        self.attribute = Some(path.into());
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "{level}: {}", self.summary)?;
        if let Some(attribute) = &self.attribute {
            write!(f, " (at {attribute})")?;
        }
        if !self.detail.is_empty() {
            write!(f, "\n\n{}", self.detail)?;
        }
        Ok(())
    }
}

impl From<ProviderError> for Diagnostic {
    fn from(error: ProviderError) -> Self {
        let attribute = error.attribute_path().map(str::to_string);
        let diagnostic = match &error {
            ProviderError::Yaml(source) => Diagnostic::error(
                DIAG_MARSHAL_SUMMARY,
                format!("{DIAG_MARSHAL_DETAIL}\n\nYAML Error: {source}"),
            ),
            ProviderError::UnknownResourceType { .. } => {
                Diagnostic::error(DIAG_UNKNOWN_TYPE_SUMMARY, error.to_string())
            }
            ProviderError::UnknownAttribute { .. }
            | ProviderError::MissingRequiredAttribute { .. }
            | ProviderError::TypeMismatch { .. } => {
                Diagnostic::error(DIAG_INVALID_ATTRIBUTE_SUMMARY, error.to_string())
            }
            ProviderError::InvalidSpec { .. } | ProviderError::InvalidState { .. } => {
                Diagnostic::error(DIAG_INVALID_SPEC_SUMMARY, error.to_string())
            }
            ProviderError::InvalidManifest(_) | ProviderError::ManifestKindMismatch { .. } => {
                Diagnostic::error(DIAG_IMPORT_SUMMARY, error.to_string())
            }
            ProviderError::SchemaGeneration { .. } => {
                Diagnostic::error(DIAG_SCHEMA_SUMMARY, error.to_string())
            }
        };
        match attribute {
            Some(path) => diagnostic.with_attribute(path),
            None => diagnostic,
        }
    }
}

/// Result of a provider operation: the new state (if any) and diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Response {
    /// New state; `None` when the operation failed or removed the resource
    pub new_state: Option<Value>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Response {
    #[must_use]
    pub fn ok(state: Value) -> Self {
        Self {
            new_state: Some(state),
            diagnostics: Vec::new(),
        }
    }

    /// Response for operations that succeed without producing state (Delete).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_error(error: ProviderError) -> Self {
        Self {
            new_state: None,
            diagnostics: vec![error.into()],
        }
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

impl From<Result<Value, ProviderError>> for Response {
    fn from(result: Result<Value, ProviderError>) -> Self {
        match result {
            Ok(state) => Self::ok(state),
            Err(error) => Self::from_error(error),
        }
    }
}
