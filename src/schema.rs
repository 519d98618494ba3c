// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Terraform schema model derived from CRD OpenAPI schemas.
//!
//! Each resource's schema is computed from the structural OpenAPI v3 schema
//! that `kube` generates for the CRD type, so the Rust type remains the only
//! place a field is declared. Property names are converted to `snake_case`
//! and each attribute remembers the manifest name it maps back to.
//!
//! # Type mapping
//!
//! | OpenAPI                                 | Attribute kind  |
//! | --------------------------------------- | --------------- |
//! | `string`                                | `String`        |
//! | `integer`                               | `Int64`         |
//! | `number`                                | `Number`        |
//! | `boolean`                               | `Bool`          |
//! | `array`                                 | `List`          |
//! | `object` with `properties`              | `Object`        |
//! | `object` with `additionalProperties`    | `Map`           |
//! | `x-kubernetes-int-or-string`            | `IntOrString`   |
//! | `x-kubernetes-preserve-unknown-fields`  | `Dynamic`       |

use crate::constants::{
    ATTR_API_VERSION, ATTR_ID, ATTR_KIND, ATTR_METADATA, ATTR_SPEC, ATTR_YAML, INT_OR_STRING_NOTE,
    SCHEMA_VERSION, SCOPE_NAMESPACED, X_INT_OR_STRING, X_PRESERVE_UNKNOWN_FIELDS,
};
use crate::errors::ProviderError;
use crate::naming::{resource_type_name, to_snake_case};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Attributes of an object, keyed by `snake_case` attribute name.
pub type Attributes = BTreeMap<String, Attribute>;

/// Value type of an attribute.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int64,
    Number,
    Bool,
    /// Presented as a string; numeric strings are written as integers.
    IntOrString,
    /// Arbitrary JSON passed through verbatim.
    Dynamic,
    List {
        element: Box<AttributeKind>,
    },
    Map {
        element: Box<AttributeKind>,
    },
    Object {
        attributes: Attributes,
    },
}

impl AttributeKind {
    /// Short type label used in diagnostics and documentation.
    #[must_use]
    pub fn type_label(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Int64 => "int64".to_string(),
            Self::Number => "number".to_string(),
            Self::Bool => "bool".to_string(),
            Self::IntOrString => "string (int or string)".to_string(),
            Self::Dynamic => "dynamic".to_string(),
            Self::List { element } => format!("list({})", element.type_label()),
            Self::Map { element } => format!("map({})", element.type_label()),
            Self::Object { .. } => "object".to_string(),
        }
    }
}

/// A single Terraform attribute.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    pub kind: AttributeKind,
    /// Field name in the manifest (`camelCase`).
    pub manifest_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
}

impl Attribute {
    #[must_use]
    pub fn required(manifest_name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            kind,
            manifest_name: manifest_name.into(),
            description: None,
            required: true,
            optional: false,
            computed: false,
        }
    }

    #[must_use]
    pub fn optional(manifest_name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            kind,
            manifest_name: manifest_name.into(),
            description: None,
            required: false,
            optional: true,
            computed: false,
        }
    }

    #[must_use]
    pub fn computed(manifest_name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            kind,
            manifest_name: manifest_name.into(),
            description: None,
            required: false,
            optional: false,
            computed: true,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Nested attributes when this attribute is an object.
    #[must_use]
    pub fn attributes(&self) -> Option<&Attributes> {
        match &self.kind {
            AttributeKind::Object { attributes } => Some(attributes),
            _ => None,
        }
    }
}

/// Schema of one resource type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResourceSchema {
    pub type_name: String,
    pub version: i64,
    pub description: String,
    /// `group/version` stamped into every manifest.
    pub api_version: String,
    /// Kind stamped into every manifest.
    pub kind: String,
    pub namespaced: bool,
    pub attributes: Attributes,
}

impl ResourceSchema {
    /// Derive the schema from a generated CRD.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SchemaGeneration`] if the CRD has no served
    /// version with an OpenAPI schema, or if a property cannot be mapped.
    pub fn for_crd(crd: &CustomResourceDefinition) -> Result<Self, ProviderError> {
        let document = serde_json::to_value(crd).map_err(|e| ProviderError::SchemaGeneration {
            type_name: crd.spec.names.kind.clone(),
            reason: e.to_string(),
        })?;
        Self::from_crd_document(&document)
    }

    /// Derive the schema from a CRD in its JSON form.
    ///
    /// # Errors
    ///
    /// See [`ResourceSchema::for_crd`].
    pub fn from_crd_document(crd: &Value) -> Result<Self, ProviderError> {
        let spec = &crd["spec"];
        let group = spec["group"].as_str().unwrap_or_default();
        let kind = spec["names"]["kind"].as_str().unwrap_or_default();
        let version = &spec["versions"][0];
        let version_name = version["name"].as_str().unwrap_or_default();

        if kind.is_empty() || version_name.is_empty() {
            return Err(ProviderError::SchemaGeneration {
                type_name: format!("{group}/{kind}"),
                reason: "CRD has no kind or served version".to_string(),
            });
        }

        let type_name = resource_type_name(group, version_name, kind);
        let fail = |reason: String| ProviderError::SchemaGeneration {
            type_name: type_name.clone(),
            reason,
        };

        let root = &version["schema"]["openAPIV3Schema"];
        if !root.is_object() {
            return Err(fail("version has no openAPIV3Schema".to_string()));
        }

        let namespaced = spec["scope"].as_str() == Some(SCOPE_NAMESPACED);
        let description = root["description"]
            .as_str()
            .map_or_else(|| format!("{kind} Custom Resource"), str::to_string);

        let mut attributes = Attributes::new();
        attributes.insert(
            ATTR_ID.to_string(),
            Attribute::computed(ATTR_ID, AttributeKind::String)
                .with_description("Unique identifier of this resource instance."),
        );
        attributes.insert(
            ATTR_API_VERSION.to_string(),
            Attribute::computed("apiVersion", AttributeKind::String)
                .with_description("API group and version of the rendered manifest."),
        );
        attributes.insert(
            ATTR_KIND.to_string(),
            Attribute::computed(ATTR_KIND, AttributeKind::String)
                .with_description("Kind of the rendered manifest."),
        );
        attributes.insert(
            ATTR_YAML.to_string(),
            Attribute::computed(ATTR_YAML, AttributeKind::String)
                .with_description("The generated manifest in YAML format."),
        );
        attributes.insert(ATTR_METADATA.to_string(), metadata_attribute(namespaced));

        if let Some(spec_schema) = root["properties"].get(ATTR_SPEC) {
            let spec_schema = resolve(spec_schema);
            let spec_attributes = object_attributes(spec_schema, ATTR_SPEC).map_err(fail)?;
            let has_required = spec_schema["required"]
                .as_array()
                .is_some_and(|r| !r.is_empty());
            let spec_kind = AttributeKind::Object {
                attributes: spec_attributes,
            };
            let mut attribute = if has_required {
                Attribute::required(ATTR_SPEC, spec_kind)
            } else {
                Attribute::optional(ATTR_SPEC, spec_kind)
            };
            attribute.description = spec_schema["description"].as_str().map(str::to_string);
            attributes.insert(ATTR_SPEC.to_string(), attribute);
        }

        Ok(Self {
            type_name,
            version: SCHEMA_VERSION,
            description,
            api_version: if group.is_empty() {
                version_name.to_string()
            } else {
                format!("{group}/{version_name}")
            },
            kind: kind.to_string(),
            namespaced,
            attributes,
        })
    }

    /// Attributes of the `spec` block, if the CRD has one.
    #[must_use]
    pub fn spec_attributes(&self) -> Option<&Attributes> {
        self.attributes.get(ATTR_SPEC).and_then(Attribute::attributes)
    }

    /// Whether the `spec` block must be set.
    #[must_use]
    pub fn spec_required(&self) -> bool {
        self.attributes
            .get(ATTR_SPEC)
            .is_some_and(|attribute| attribute.required)
    }

    /// Copy of this schema published under a data source type name.
    #[must_use]
    pub fn for_data_source(&self, type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..self.clone()
        }
    }
}

fn metadata_attribute(namespaced: bool) -> Attribute {
    let string_map = || AttributeKind::Map {
        element: Box::new(AttributeKind::String),
    };

    let mut attributes = Attributes::new();
    attributes.insert(
        "name".to_string(),
        Attribute::required("name", AttributeKind::String)
            .with_description("Unique name of the object within its scope."),
    );
    if namespaced {
        attributes.insert(
            "namespace".to_string(),
            Attribute::required("namespace", AttributeKind::String)
                .with_description("Namespace the object belongs to."),
        );
    }
    attributes.insert(
        "labels".to_string(),
        Attribute::optional("labels", string_map())
            .with_description("Map of string keys and values used to organize and categorize objects."),
    );
    attributes.insert(
        "annotations".to_string(),
        Attribute::optional("annotations", string_map())
            .with_description("Unstructured key value map stored with the object."),
    );

    Attribute::required(ATTR_METADATA, AttributeKind::Object { attributes })
        .with_description("Data that helps uniquely identify the object.")
}

/// Unwrap `allOf`/`anyOf`/`oneOf` wrappers that only add nullability.
fn resolve(schema: &Value) -> &Value {
    if schema.get("properties").is_some() || schema.get("type").is_some() {
        return schema;
    }
    for key in ["allOf", "anyOf", "oneOf"] {
        if let Some(variants) = schema[key].as_array() {
            let mut non_null = variants
                .iter()
                .filter(|variant| variant["type"].as_str() != Some("null"));
            if let (Some(only), None) = (non_null.next(), non_null.next()) {
                return resolve(only);
            }
        }
    }
    schema
}

fn object_attributes(schema: &Value, path: &str) -> Result<Attributes, String> {
    let required: Vec<&str> = schema["required"]
        .as_array()
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut attributes = Attributes::new();
    let Some(properties) = schema["properties"].as_object() else {
        return Ok(attributes);
    };

    for (manifest_name, property) in properties {
        let attribute_name = to_snake_case(manifest_name);
        let child_path = format!("{path}.{attribute_name}");
        let property = resolve(property);

        if let Some(existing) = attributes.get(&attribute_name) {
            return Err(format!(
                "properties '{}' and '{manifest_name}' both map to attribute '{child_path}'",
                existing.manifest_name
            ));
        }

        let kind = attribute_kind(property, &child_path)?;
        let mut description = property["description"].as_str().map(str::to_string);
        if kind == AttributeKind::IntOrString {
            description = Some(match description {
                Some(text) => format!("{} {INT_OR_STRING_NOTE}", text.trim_end()),
                None => INT_OR_STRING_NOTE.to_string(),
            });
        }

        let mut attribute = if required.contains(&manifest_name.as_str()) {
            Attribute::required(manifest_name.clone(), kind)
        } else {
            Attribute::optional(manifest_name.clone(), kind)
        };
        attribute.description = description;
        attributes.insert(attribute_name, attribute);
    }

    Ok(attributes)
}

fn attribute_kind(schema: &Value, path: &str) -> Result<AttributeKind, String> {
    if schema[X_INT_OR_STRING].as_bool() == Some(true) {
        return Ok(AttributeKind::IntOrString);
    }

    let preserve_unknown = schema[X_PRESERVE_UNKNOWN_FIELDS].as_bool() == Some(true);
    let has_properties = schema["properties"]
        .as_object()
        .is_some_and(|p| !p.is_empty());
    if preserve_unknown && !has_properties {
        return Ok(AttributeKind::Dynamic);
    }

    match schema["type"].as_str() {
        Some("string") => Ok(AttributeKind::String),
        Some("integer") => Ok(AttributeKind::Int64),
        Some("number") => Ok(AttributeKind::Number),
        Some("boolean") => Ok(AttributeKind::Bool),
        Some("array") => {
            let items = schema
                .get("items")
                .filter(|items| items.is_object())
                .ok_or_else(|| format!("array '{path}' has no item schema"))?;
            let element = attribute_kind(resolve(items), path)?;
            Ok(AttributeKind::List {
                element: Box::new(element),
            })
        }
        Some("object") => {
            if has_properties {
                return Ok(AttributeKind::Object {
                    attributes: object_attributes(schema, path)?,
                });
            }
            match schema.get("additionalProperties") {
                Some(values) if values.is_object() => Ok(AttributeKind::Map {
                    element: Box::new(attribute_kind(resolve(values), path)?),
                }),
                _ => Ok(AttributeKind::Dynamic),
            }
        }
        None => Ok(AttributeKind::Dynamic),
        Some(other) => Err(format!("unsupported type '{other}' at '{path}'")),
    }
}
