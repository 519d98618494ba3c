// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Schema-guided conversion between Terraform values and manifest values.
//!
//! Terraform values use `snake_case` attribute names and carry explicit
//! `null`s for unset attributes. Manifest values use the CRD's `camelCase`
//! field names and leave unset fields out. Map keys and dynamic values are
//! never renamed.

use crate::errors::ProviderError;
use crate::schema::{Attribute, AttributeKind, Attributes};
use serde_json::{Map, Number, Value};

/// Convert a Terraform object into its manifest form.
///
/// `null` attributes are dropped, required attributes must be present and
/// non-null, and attributes the schema does not declare are rejected.
///
/// # Errors
///
/// Returns an attribute-level [`ProviderError`] carrying the dotted path of
/// the first offending attribute.
pub fn to_manifest(attributes: &Attributes, value: &Value, path: &str) -> Result<Value, ProviderError> {
    let Some(object) = value.as_object() else {
        return Err(mismatch(path, "object", value));
    };

    for (name, attribute) in attributes {
        if attribute.required && object.get(name).is_none_or(Value::is_null) {
            return Err(ProviderError::MissingRequiredAttribute {
                path: join(path, name),
            });
        }
    }

    let mut out = Map::new();
    for (name, field) in object {
        if field.is_null() {
            continue;
        }
        let child_path = join(path, name);
        let attribute = attributes
            .get(name)
            .ok_or_else(|| ProviderError::UnknownAttribute {
                path: child_path.clone(),
            })?;
        let converted = value_to_manifest(&attribute.kind, field, &child_path)?;
        out.insert(attribute.manifest_name.clone(), converted);
    }

    Ok(Value::Object(out))
}

fn value_to_manifest(kind: &AttributeKind, value: &Value, path: &str) -> Result<Value, ProviderError> {
    match kind {
        AttributeKind::String => expect(value.is_string(), path, kind, value),
        AttributeKind::Int64 => expect(value.is_i64() || value.is_u64(), path, kind, value),
        AttributeKind::Number => expect(value.is_number(), path, kind, value),
        AttributeKind::Bool => expect(value.is_boolean(), path, kind, value),
        AttributeKind::Dynamic => Ok(value.clone()),
        AttributeKind::IntOrString => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            Value::String(s) => Ok(s
                .parse::<i64>()
                .map_or_else(|_| value.clone(), |n| Value::Number(Number::from(n)))),
            _ => Err(mismatch(path, &kind.type_label(), value)),
        },
        AttributeKind::List { element } => {
            let Some(items) = value.as_array() else {
                return Err(mismatch(path, &kind.type_label(), value));
            };
            items
                .iter()
                .enumerate()
                .map(|(i, item)| value_to_manifest(element, item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        AttributeKind::Map { element } => {
            let Some(entries) = value.as_object() else {
                return Err(mismatch(path, &kind.type_label(), value));
            };
            let mut out = Map::new();
            for (key, entry) in entries {
                if entry.is_null() {
                    continue;
                }
                let converted = value_to_manifest(element, entry, &format!("{path}[\"{key}\"]"))?;
                out.insert(key.clone(), converted);
            }
            Ok(Value::Object(out))
        }
        AttributeKind::Object { attributes } => to_manifest(attributes, value, path),
    }
}

/// Convert a manifest object into its Terraform form.
///
/// Every declared attribute appears in the output; fields absent from the
/// manifest become `null`.
///
/// # Errors
///
/// Returns [`ProviderError::UnknownAttribute`] for manifest fields the schema
/// does not declare and [`ProviderError::TypeMismatch`] for wrongly typed
/// values.
pub fn to_terraform(attributes: &Attributes, value: &Value, path: &str) -> Result<Value, ProviderError> {
    let Some(object) = value.as_object() else {
        return Err(mismatch(path, "object", value));
    };

    for field in object.keys() {
        if find_by_manifest_name(attributes, field).is_none() {
            return Err(ProviderError::UnknownAttribute {
                path: join(path, field),
            });
        }
    }

    let mut out = Map::new();
    for (name, attribute) in attributes {
        let converted = match object.get(&attribute.manifest_name) {
            None | Some(Value::Null) => Value::Null,
            Some(field) => value_to_terraform(&attribute.kind, field, &join(path, name))?,
        };
        out.insert(name.clone(), converted);
    }

    Ok(Value::Object(out))
}

fn value_to_terraform(kind: &AttributeKind, value: &Value, path: &str) -> Result<Value, ProviderError> {
    match kind {
        AttributeKind::IntOrString => match value {
            Value::Number(n) => Ok(Value::String(n.to_string())),
            Value::String(_) => Ok(value.clone()),
            _ => Err(mismatch(path, &kind.type_label(), value)),
        },
        AttributeKind::List { element } => {
            let Some(items) = value.as_array() else {
                return Err(mismatch(path, &kind.type_label(), value));
            };
            items
                .iter()
                .enumerate()
                .map(|(i, item)| value_to_terraform(element, item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        AttributeKind::Map { element } => {
            let Some(entries) = value.as_object() else {
                return Err(mismatch(path, &kind.type_label(), value));
            };
            let mut out = Map::new();
            for (key, entry) in entries {
                let converted = value_to_terraform(element, entry, &format!("{path}[\"{key}\"]"))?;
                out.insert(key.clone(), converted);
            }
            Ok(Value::Object(out))
        }
        AttributeKind::Object { attributes } => to_terraform(attributes, value, path),
        // Scalars share their representation on both sides.
        _ => value_to_manifest(kind, value, path),
    }
}

fn find_by_manifest_name<'a>(attributes: &'a Attributes, manifest_name: &str) -> Option<&'a Attribute> {
    attributes
        .values()
        .find(|attribute| attribute.manifest_name == manifest_name)
}

fn expect(ok: bool, path: &str, kind: &AttributeKind, value: &Value) -> Result<Value, ProviderError> {
    if ok {
        Ok(value.clone())
    } else {
        Err(mismatch(path, &kind.type_label(), value))
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> ProviderError {
    ProviderError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        found: json_type(found).to_string(),
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// JSON type name of a value, for diagnostics.
#[must_use]
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
