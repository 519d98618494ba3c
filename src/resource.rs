// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resource lifecycle handlers.
//!
//! Every resource follows the same lifecycle, so it is implemented once,
//! generically over the CRD type:
//!
//! - **Create** and **Update** stamp `api_version` and `kind`, assign a
//!   timestamp `id`, render the manifest to YAML and store it in `yaml`.
//! - **Read** returns the state unchanged; nothing lives outside of state.
//! - **Delete** does nothing; the framework drops the state.
//!
//! Importing an existing manifest, validating a configuration and rendering
//! the `*_manifest` data sources reuse the same conversion and rendering path.

use crate::constants::{
    ATTR_METADATA, ATTR_SPEC, IMPORTED_METADATA_FIELDS, SERVER_POPULATED_ROOT_FIELDS,
};
use crate::convert::{to_manifest, to_terraform};
use crate::errors::ProviderError;
use crate::schema::{Attributes, ResourceSchema};
use chrono::Utc;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{CustomResourceExt, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::debug;

/// A CRD type the provider can render.
///
/// Implemented for every CRD root type by [`crate::resource_impls`].
pub trait ManifestResource:
    Resource<DynamicType = ()> + CustomResourceExt + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The CRD's spec struct.
    type Spec: Serialize + DeserializeOwned;

    /// Assemble the root object from metadata and spec.
    fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self;
}

/// Object metadata as it appears in Terraform state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataModel {
    pub name: String,

    /// Only present for namespaced resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// Resource state and plan shape shared by every resource type.
///
/// The `spec` block stays untyped here; its shape is given by the
/// resource's [`ResourceSchema`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceModel {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub api_version: Option<String>,

    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub yaml: Option<String>,

    pub metadata: MetadataModel,

    #[serde(default)]
    pub spec: Option<Value>,
}

/// State built from an imported manifest.
#[derive(Clone, Debug, PartialEq)]
pub struct Imported {
    pub state: Value,
    /// Dotted paths of server-populated manifest fields left out of state
    pub dropped: Vec<String>,
}

/// Object-safe view of a resource handler, used by the provider registry.
pub trait ResourceHandler: Send + Sync {
    fn schema(&self) -> &ResourceSchema;

    /// The CRD definition the resource type is rendered against.
    fn crd(&self) -> CustomResourceDefinition;

    /// Render the planned state and return it as new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan does not match the schema, does not decode
    /// into the CRD type, or cannot be marshalled to YAML.
    fn create(&self, plan: Value) -> Result<Value, ProviderError>;

    /// Return the current state unchanged.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other handlers.
    fn read(&self, state: Value) -> Result<Value, ProviderError>;

    /// Render the planned state, exactly like [`ResourceHandler::create`].
    ///
    /// # Errors
    ///
    /// See [`ResourceHandler::create`].
    fn update(&self, prior: Value, plan: Value) -> Result<Value, ProviderError>;

    /// Remove the resource. Nothing exists outside of state.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other handlers.
    fn delete(&self, state: Value) -> Result<(), ProviderError>;

    /// Check a configuration without producing state.
    ///
    /// # Errors
    ///
    /// Returns the same errors [`ResourceHandler::create`] would.
    fn validate(&self, config: Value) -> Result<(), ProviderError>;

    /// Build state from an existing YAML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidManifest`] if the manifest is not YAML,
    /// [`ProviderError::ManifestKindMismatch`] if it is of another kind, and
    /// conversion errors for fields the schema lacks.
    fn import(&self, manifest: &str) -> Result<Imported, ProviderError>;

    /// Render the `*_manifest` data source.
    ///
    /// # Errors
    ///
    /// See [`ResourceHandler::create`].
    fn read_data_source(&self, config: Value) -> Result<Value, ProviderError>;
}

/// Lifecycle handler for one CRD type.
pub struct ManifestHandler<K> {
    schema: ResourceSchema,
    _resource: PhantomData<fn() -> K>,
}

impl<K: ManifestResource> ManifestHandler<K> {
    /// Create a handler, deriving the schema from the CRD type.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SchemaGeneration`] if the CRD schema cannot be mapped.
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            schema: ResourceSchema::for_crd(&K::crd())?,
            _resource: PhantomData,
        })
    }

    fn decode(&self, value: Value) -> Result<ResourceModel, ProviderError> {
        serde_json::from_value(value).map_err(|source| ProviderError::InvalidState {
            type_name: self.schema.type_name.clone(),
            source,
        })
    }

    fn encode(&self, model: &ResourceModel) -> Result<Value, ProviderError> {
        serde_json::to_value(model).map_err(|source| ProviderError::InvalidState {
            type_name: self.schema.type_name.clone(),
            source,
        })
    }

    /// Build the typed object described by a model.
    fn build(&self, model: &ResourceModel) -> Result<K, ProviderError> {
        let metadata = &model.metadata;
        match (self.schema.namespaced, &metadata.namespace) {
            (true, None) => {
                return Err(ProviderError::MissingRequiredAttribute {
                    path: "metadata.namespace".to_string(),
                })
            }
            (false, Some(_)) => {
                return Err(ProviderError::UnknownAttribute {
                    path: "metadata.namespace".to_string(),
                })
            }
            _ => {}
        }

        let object_meta = ObjectMeta {
            name: Some(metadata.name.clone()),
            namespace: metadata.namespace.clone(),
            labels: metadata.labels.clone(),
            annotations: metadata.annotations.clone(),
            ..ObjectMeta::default()
        };

        let empty = Value::Object(Map::new());
        let spec_value = match (&model.spec, self.schema.spec_required()) {
            (Some(spec), _) if !spec.is_null() => spec,
            (_, true) => {
                return Err(ProviderError::MissingRequiredAttribute {
                    path: "spec".to_string(),
                })
            }
            _ => &empty,
        };

        let no_attributes = Attributes::new();
        let spec_attributes = self.schema.spec_attributes().unwrap_or(&no_attributes);
        let manifest_spec = to_manifest(spec_attributes, spec_value, "spec")?;
        let spec: K::Spec =
            serde_json::from_value(manifest_spec).map_err(|source| ProviderError::InvalidSpec {
                type_name: self.schema.type_name.clone(),
                source,
            })?;

        Ok(K::from_parts(object_meta, spec))
    }

    /// Stamp the constant fields, render the manifest and encode the state.
    fn render(&self, mut model: ResourceModel, id: String) -> Result<Value, ProviderError> {
        let object = self.build(&model)?;

        model.api_version = Some(K::api_version(&()).into_owned());
        model.kind = Some(K::kind(&()).into_owned());
        model.id = Some(id);
        model.yaml = Some(serde_yaml::to_string(&object)?);

        self.encode(&model)
    }
}

/// Identifier for resource instances: UNIX time in nanoseconds.
fn timestamp_id() -> String {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map_or_else(|| now.timestamp_micros().to_string(), |nanos| nanos.to_string())
}

/// Server-populated fields of a manifest that state does not carry.
///
/// Any other root field the resource does not model is an error.
fn dropped_fields(document: &Value, namespaced: bool) -> Result<Vec<String>, ProviderError> {
    let Some(root) = document.as_object() else {
        return Ok(Vec::new());
    };

    let mut dropped = Vec::new();
    for field in root.keys() {
        match field.as_str() {
            "apiVersion" | "kind" | ATTR_METADATA | ATTR_SPEC => {}
            other if SERVER_POPULATED_ROOT_FIELDS.contains(&other) => dropped.push(other.to_string()),
            other => {
                return Err(ProviderError::UnknownAttribute {
                    path: other.to_string(),
                })
            }
        }
    }

    if let Some(metadata) = document[ATTR_METADATA].as_object() {
        for field in metadata.keys() {
            let kept = IMPORTED_METADATA_FIELDS.contains(&field.as_str())
                && (namespaced || field.as_str() != "namespace");
            if !kept {
                dropped.push(format!("{ATTR_METADATA}.{field}"));
            }
        }
    }

    dropped.sort();
    Ok(dropped)
}

/// Identifier for data source instances: `namespace/name` or `name`.
fn object_id(metadata: &MetadataModel) -> String {
    match &metadata.namespace {
        Some(namespace) => format!("{namespace}/{}", metadata.name),
        None => metadata.name.clone(),
    }
}

impl<K: ManifestResource> ResourceHandler for ManifestHandler<K> {
    fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    fn crd(&self) -> CustomResourceDefinition {
        K::crd()
    }

    fn create(&self, plan: Value) -> Result<Value, ProviderError> {
        debug!("Create resource {}", self.schema.type_name);
        let model = self.decode(plan)?;
        self.render(model, timestamp_id())
    }

    fn read(&self, state: Value) -> Result<Value, ProviderError> {
        debug!("Read resource {}", self.schema.type_name);
        Ok(state)
    }

    fn update(&self, _prior: Value, plan: Value) -> Result<Value, ProviderError> {
        debug!("Update resource {}", self.schema.type_name);
        let model = self.decode(plan)?;
        self.render(model, timestamp_id())
    }

    fn delete(&self, _state: Value) -> Result<(), ProviderError> {
        debug!("Delete resource {}", self.schema.type_name);
        Ok(())
    }

    fn validate(&self, config: Value) -> Result<(), ProviderError> {
        debug!("Validate resource {}", self.schema.type_name);
        let model = self.decode(config)?;
        self.build(&model).map(|_| ())
    }

    fn import(&self, manifest: &str) -> Result<Imported, ProviderError> {
        debug!("Import resource {}", self.schema.type_name);
        let document: Value =
            serde_yaml::from_str(manifest).map_err(ProviderError::InvalidManifest)?;

        let expected = format!("{}/{}", self.schema.api_version, self.schema.kind);
        let found = format!(
            "{}/{}",
            document["apiVersion"].as_str().unwrap_or_default(),
            document["kind"].as_str().unwrap_or_default()
        );
        if expected != found {
            return Err(ProviderError::ManifestKindMismatch { expected, found });
        }

        let dropped = dropped_fields(&document, self.schema.namespaced)?;

        // Convert the manifest's own spec so fields the schema lacks are reported.
        let spec = match (self.schema.spec_attributes(), document.get(ATTR_SPEC)) {
            (Some(attributes), Some(raw)) if !raw.is_null() => {
                Some(to_terraform(attributes, raw, ATTR_SPEC)?)
            }
            _ => None,
        };

        let object: K =
            serde_json::from_value(document).map_err(|source| ProviderError::InvalidSpec {
                type_name: self.schema.type_name.clone(),
                source,
            })?;

        let name = object
            .meta()
            .name
            .clone()
            .ok_or_else(|| ProviderError::MissingRequiredAttribute {
                path: "metadata.name".to_string(),
            })?;
        let namespace = if self.schema.namespaced {
            Some(object.namespace().ok_or_else(|| {
                ProviderError::MissingRequiredAttribute {
                    path: "metadata.namespace".to_string(),
                }
            })?)
        } else {
            None
        };

        let model = ResourceModel {
            metadata: MetadataModel {
                name,
                namespace,
                labels: object.meta().labels.clone(),
                annotations: object.meta().annotations.clone(),
            },
            spec,
            ..ResourceModel::default()
        };

        if !dropped.is_empty() {
            debug!("Import of {} dropped {}", self.schema.type_name, dropped.join(", "));
        }
        Ok(Imported {
            state: self.render(model, timestamp_id())?,
            dropped,
        })
    }

    fn read_data_source(&self, config: Value) -> Result<Value, ProviderError> {
        debug!("Read data source {}", self.schema.type_name);
        let model = self.decode(config)?;
        let id = object_id(&model.metadata);
        self.render(model, id)
    }
}
