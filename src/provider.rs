// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider registry and operation dispatch.
//!
//! The [`Provider`] owns one handler per resource type and routes every
//! operation by type name. Each operation returns a [`Response`], so callers
//! always receive diagnostics rather than Rust errors.
//!
//! # Example
//!
//! ```rust
//! use crd_provider::provider::Provider;
//! use serde_json::json;
//!
//! let provider = Provider::new().unwrap();
//! let response = provider.create(
//!     "k8s_kueue_x_k8s_io_resource_flavor_v1beta1",
//!     json!({
//!         "metadata": { "name": "spot" },
//!         "spec": { "node_labels": { "instance-type": "spot" } }
//!     }),
//! );
//! assert!(!response.has_errors());
//! ```

use crate::constants::DIAG_IMPORT_DROPPED_SUMMARY;
use crate::diagnostics::{Diagnostic, Response};
use crate::errors::ProviderError;
use crate::naming::{data_source_type_name, resource_for_data_source};
use crate::resource::{Imported, ResourceHandler};
use crate::resource_impls::all_handlers;
use crate::schema::ResourceSchema;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Type names served by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub resources: Vec<String>,
    pub data_sources: Vec<String>,
}

/// Registry of every resource type the provider serves.
pub struct Provider {
    handlers: BTreeMap<String, Box<dyn ResourceHandler>>,
}

impl Provider {
    /// Create a provider with every supported resource registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a CRD schema cannot be derived or two resources
    /// share a type name.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_handlers(all_handlers()?)
    }

    /// Create a provider from an explicit set of handlers.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SchemaGeneration`] if two handlers share a
    /// type name.
    pub fn with_handlers(handlers: Vec<Box<dyn ResourceHandler>>) -> Result<Self, ProviderError> {
        let mut registry = BTreeMap::new();
        for handler in handlers {
            let type_name = handler.schema().type_name.clone();
            if registry.contains_key(&type_name) {
                return Err(ProviderError::SchemaGeneration {
                    type_name,
                    reason: "type name registered twice".to_string(),
                });
            }
            debug!("Registered resource type {type_name}");
            registry.insert(type_name, handler);
        }
        info!("Provider ready with {} resource types", registry.len());
        Ok(Self { handlers: registry })
    }

    /// Resource and data source type names, sorted.
    #[must_use]
    pub fn metadata(&self) -> ProviderMetadata {
        let resources: Vec<String> = self.handlers.keys().cloned().collect();
        let data_sources = resources
            .iter()
            .map(|name| data_source_type_name(name))
            .collect();
        ProviderMetadata {
            resources,
            data_sources,
        }
    }

    /// Registered handlers in type name order.
    pub fn handlers(&self) -> impl Iterator<Item = &dyn ResourceHandler> {
        self.handlers.values().map(AsRef::as_ref)
    }

    fn handler(&self, type_name: &str) -> Result<&dyn ResourceHandler, ProviderError> {
        self.handlers
            .get(type_name)
            .map(AsRef::as_ref)
            .ok_or_else(|| ProviderError::UnknownResourceType {
                type_name: type_name.to_string(),
            })
    }

    fn data_source_handler(&self, type_name: &str) -> Result<&dyn ResourceHandler, ProviderError> {
        resource_for_data_source(type_name)
            .and_then(|resource| self.handlers.get(resource))
            .map(AsRef::as_ref)
            .ok_or_else(|| ProviderError::UnknownResourceType {
                type_name: type_name.to_string(),
            })
    }

    /// Schema of a resource type.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownResourceType`] for unregistered names.
    pub fn schema(&self, type_name: &str) -> Result<&ResourceSchema, ProviderError> {
        self.handler(type_name).map(ResourceHandler::schema)
    }

    /// Schema of a `*_manifest` data source.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownResourceType`] for unregistered names.
    pub fn data_source_schema(&self, type_name: &str) -> Result<ResourceSchema, ProviderError> {
        self.data_source_handler(type_name)
            .map(|handler| handler.schema().for_data_source(type_name))
    }

    #[must_use]
    pub fn create(&self, type_name: &str, plan: Value) -> Response {
        self.handler(type_name)
            .and_then(|handler| handler.create(plan))
            .into()
    }

    #[must_use]
    pub fn read(&self, type_name: &str, state: Value) -> Response {
        self.handler(type_name)
            .and_then(|handler| handler.read(state))
            .into()
    }

    #[must_use]
    pub fn update(&self, type_name: &str, prior: Value, plan: Value) -> Response {
        self.handler(type_name)
            .and_then(|handler| handler.update(prior, plan))
            .into()
    }

    /// Delete a resource; a successful response carries no state.
    #[must_use]
    pub fn delete(&self, type_name: &str, state: Value) -> Response {
        match self
            .handler(type_name)
            .and_then(|handler| handler.delete(state))
        {
            Ok(()) => Response::empty(),
            Err(error) => Response::from_error(error),
        }
    }

    /// Import a manifest. Server-populated fields left out of state are
    /// reported as a warning.
    #[must_use]
    pub fn import(&self, type_name: &str, manifest: &str) -> Response {
        match self
            .handler(type_name)
            .and_then(|handler| handler.import(manifest))
        {
            Ok(Imported { state, dropped }) => {
                let mut response = Response::ok(state);
                if !dropped.is_empty() {
                    response.diagnostics.push(Diagnostic::warning(
                        DIAG_IMPORT_DROPPED_SUMMARY,
                        format!(
                            "The following fields are managed by the API server and were not imported: {}",
                            dropped.join(", ")
                        ),
                    ));
                }
                response
            }
            Err(error) => Response::from_error(error),
        }
    }

    /// Validate a configuration. Accepts resource or data source type names.
    #[must_use]
    pub fn validate(&self, type_name: &str, config: Value) -> Response {
        let handler = self
            .handler(type_name)
            .or_else(|_| self.data_source_handler(type_name));
        match handler.and_then(|handler| handler.validate(config)) {
            Ok(()) => Response::empty(),
            Err(error) => Response::from_error(error),
        }
    }

    #[must_use]
    pub fn read_data_source(&self, type_name: &str, config: Value) -> Response {
        self.data_source_handler(type_name)
            .and_then(|handler| handler.read_data_source(config))
            .into()
    }
}
