// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Markdown reference for the provider's resource schemas.
//!
//! Used by the `crddoc` binary and the `schema --markdown` command. Nested
//! attributes are flattened into dotted paths, so a single table per resource
//! covers the whole `spec`.

use crate::naming::data_source_type_name;
use crate::provider::Provider;
use crate::schema::{Attribute, AttributeKind, Attributes, ResourceSchema};

/// Render the full reference for every registered resource.
#[must_use]
pub fn render_reference(provider: &Provider) -> String {
    let mut lines = vec![
        "# Resource Reference".to_string(),
        String::new(),
        "This document describes the resources and data sources provided by this provider."
            .to_string(),
        String::new(),
        "> **Note**: This file is AUTO-GENERATED from the CRD types".to_string(),
        "> DO NOT EDIT MANUALLY - Run `cargo run --bin crddoc` to regenerate".to_string(),
        String::new(),
        "## Table of Contents".to_string(),
        String::new(),
    ];

    for handler in provider.handlers() {
        let type_name = &handler.schema().type_name;
        lines.push(format!("- [{type_name}](#{type_name})"));
    }
    lines.push(String::new());

    for handler in provider.handlers() {
        lines.push(render_resource(handler.schema()));
    }

    lines.join("\n")
}

/// Render the reference section of one resource.
#[must_use]
pub fn render_resource(schema: &ResourceSchema) -> String {
    let scope = if schema.namespaced {
        "Namespaced"
    } else {
        "Cluster"
    };

    let mut lines = vec![
        format!("### {}", schema.type_name),
        String::new(),
        format!("**API Version**: `{}`", schema.api_version),
        String::new(),
        format!("**Kind**: `{}` ({scope})", schema.kind),
        String::new(),
        format!(
            "**Data Source**: `{}`",
            data_source_type_name(&schema.type_name)
        ),
        String::new(),
        escape(&schema.description),
        String::new(),
        "| Attribute | Type | Mode | Description |".to_string(),
        "| --------- | ---- | ---- | ----------- |".to_string(),
    ];

    attribute_rows(&schema.attributes, "", &mut lines);

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn attribute_rows(attributes: &Attributes, prefix: &str, lines: &mut Vec<String>) {
    for (name, attribute) in attributes {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        lines.push(format!(
            "| `{path}` | {} | {} | {} |",
            attribute.kind.type_label(),
            mode(attribute),
            attribute.description.as_deref().map(escape).unwrap_or_default()
        ));

        if let Some(nested) = nested_attributes(&attribute.kind) {
            attribute_rows(nested, &path, lines);
        }
    }
}

/// Nested attributes of objects, including objects inside lists and maps.
fn nested_attributes(kind: &AttributeKind) -> Option<&Attributes> {
    match kind {
        AttributeKind::Object { attributes } => Some(attributes),
        AttributeKind::List { element } | AttributeKind::Map { element } => {
            nested_attributes(element)
        }
        _ => None,
    }
}

fn mode(attribute: &Attribute) -> &'static str {
    if attribute.required {
        "Required"
    } else if attribute.computed {
        "Computed"
    } else {
        "Optional"
    }
}

/// Escape pipe characters and flatten newlines for markdown tables.
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
