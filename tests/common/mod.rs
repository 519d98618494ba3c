// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use crd_provider::provider::Provider;
use serde_json::Value;

/// Build the provider, failing the test if any schema cannot be derived.
pub fn provider() -> Provider {
    Provider::new().expect("provider should initialize")
}

/// Create a resource and return its new state, failing on any diagnostic.
pub fn create(provider: &Provider, type_name: &str, plan: Value) -> Value {
    let response = provider.create(type_name, plan);
    assert!(
        !response.has_errors(),
        "create {type_name} failed: {:?}",
        response.diagnostics
    );
    response.new_state.expect("create should return state")
}

/// The rendered YAML of a state, parsed back into a JSON value.
pub fn manifest(state: &Value) -> Value {
    let yaml = state["yaml"].as_str().expect("state should carry yaml");
    serde_yaml::from_str(yaml).expect("rendered yaml should parse")
}

/// Whether a JSON value contains `null` anywhere.
pub fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(fields) => fields.values().any(contains_null),
        _ => false,
    }
}
