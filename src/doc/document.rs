use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// A gold document as read from the input dataset.
///
/// Only `doc_key` and `sentences` are structural; every other field
/// (gold clusters, ner, relations, events, bookkeeping tags) is carried
/// opaquely so the merged output keeps the input schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    doc_key: String,
    sentences: Vec<Vec<String>>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Document {
    pub fn doc_key(&self) -> &str {
        &self.doc_key
    }

    pub fn n_sentences(&self) -> usize {
        self.sentences.len()
    }

    pub fn sentence_lengths(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.len()).collect()
    }

    /// Set or replace a non-structural field.
    pub fn set_field(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Flatten the document into a plain JSON object.
    pub fn into_object(self) -> Result<Map<String, Value>, Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::Custom(
                "document did not serialize to an object".to_string(),
            )),
        }
    }
}
