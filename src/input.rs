// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reading plan, state and manifest documents for the CLI.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Path value that selects standard input.
pub const STDIN: &str = "-";

/// Read a document as text from a file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse a JSON or YAML document. JSON is a subset of YAML, so a single
/// parser handles both.
///
/// # Errors
///
/// Returns an error if the text is neither valid JSON nor YAML.
pub fn parse_document(text: &str) -> Result<Value> {
    let value: Value = serde_yaml::from_str(text).context("Failed to parse document")?;
    Ok(value)
}

/// Read and parse a document from a file or stdin.
///
/// # Errors
///
/// See [`read_text`] and [`parse_document`].
pub fn load_document(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    parse_document(&text).with_context(|| format!("Invalid document in {}", path.display()))
}
