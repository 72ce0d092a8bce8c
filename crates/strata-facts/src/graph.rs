//! Company-facts graph access.
//!
//! The graph is kept as a raw [`serde_json::Value`] so it can be archived
//! unmodified; concept records are parsed on lookup.

use crate::error::{FactsError, Result};
use crate::fact::Fact;
use serde_json::{Map, Value};

/// A parsed company-facts document.
#[derive(Debug, Clone, PartialEq)]
pub struct FactGraph {
    root: Value,
}

impl FactGraph {
    /// Parses a JSON document. The root must be an object.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Wraps an already-parsed document. The root must be an object.
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(FactsError::InvalidGraph("root is not an object".to_string()));
        }
        Ok(Self { root })
    }

    /// The document exactly as parsed.
    pub fn raw(&self) -> &Value {
        &self.root
    }

    /// Registrant name (`entityName`), when present.
    pub fn entity_name(&self) -> Option<&str> {
        self.root.get("entityName").and_then(Value::as_str)
    }

    /// Central Index Key, zero-padded to ten digits. Accepts both the numeric
    /// and the string form.
    pub fn cik(&self) -> Option<String> {
        match self.root.get("cik")? {
            Value::Number(number) => number.as_u64().map(|cik| format!("{cik:010}")),
            Value::String(text) => Some(format!("{:0>10}", text.trim())),
            _ => None,
        }
    }

    /// Selects the concept map for a taxonomy namespace such as `us-gaap`.
    ///
    /// The namespace is looked up in the `facts` object, or in the root when
    /// there is no `facts` key. When it is absent or empty the facts object
    /// itself is used. Fails if the selection holds no concepts.
    pub fn namespace<'a>(&'a self, label: &str) -> Result<Namespace<'a>> {
        let facts = match self.root.get("facts") {
            Some(Value::Object(facts)) => facts,
            Some(_) => {
                return Err(FactsError::InvalidGraph("facts is not an object".to_string()));
            }
            None => self.root.as_object().ok_or_else(|| {
                FactsError::InvalidGraph("root is not an object".to_string())
            })?,
        };

        let concepts = match facts.get(label) {
            Some(Value::Object(concepts)) if !concepts.is_empty() => concepts,
            _ => {
                tracing::debug!(namespace = label, "namespace_fallback");
                facts
            }
        };

        if concepts.is_empty() {
            return Err(FactsError::InvalidGraph("graph contains no concepts".to_string()));
        }
        Ok(Namespace { concepts })
    }
}

/// Concept records of one namespace.
#[derive(Debug, Clone, Copy)]
pub struct Namespace<'a> {
    concepts: &'a Map<String, Value>,
}

impl<'a> Namespace<'a> {
    /// Looks up and parses a concept.
    ///
    /// A malformed record is logged and reported as absent.
    pub fn fact(&self, concept: &str) -> Option<Fact> {
        let value = self.concepts.get(concept)?;
        match Fact::from_value(concept, value) {
            Ok(fact) => Some(fact),
            Err(err) => {
                tracing::warn!(concept, error = %err, "malformed_concept");
                None
            }
        }
    }

    /// Concept names in document order.
    pub fn concept_names(&self) -> impl Iterator<Item = &'a str> {
        self.concepts.keys().map(String::as_str)
    }

    /// Number of concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// True if the namespace holds no concepts.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}
