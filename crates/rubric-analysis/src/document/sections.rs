//! Section extraction: split a document into named sections by `#` headers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Document;

const HEADER_MARKER: char = '#';

/// Normalized section name (lower-cased header text) to trimmed body.
///
/// Ordered by name so every downstream iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap {
    sections: BTreeMap<String, String>,
}

impl SectionMap {
    /// Extract sections from a document.
    ///
    /// A line starting with one or more `#` opens a section named by the
    /// rest of the line (markers and surrounding whitespace stripped,
    /// lower-cased). Text before the first header is dropped. A header
    /// with nothing after the markers opens no section, so its body is
    /// dropped too. Repeated names keep the last body.
    pub fn extract(document: &Document) -> Self {
        let mut sections = BTreeMap::new();
        let mut current: Option<String> = None;
        let mut body: Vec<&str> = Vec::new();

        for line in document.lines() {
            if line.starts_with(HEADER_MARKER) {
                if let Some(name) = current.take() {
                    sections.insert(name, body.join("\n").trim().to_string());
                }
                let name = line.trim_start_matches(HEADER_MARKER).trim().to_lowercase();
                current = (!name.is_empty()).then_some(name);
                body.clear();
            } else if current.is_some() {
                body.push(line);
            }
        }

        if let Some(name) = current {
            sections.insert(name, body.join("\n").trim().to_string());
        }

        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.sections.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True if any section name contains `needle` as a substring.
    pub fn any_name_contains(&self, needle: &str) -> bool {
        self.sections.keys().any(|name| name.contains(needle))
    }
}
