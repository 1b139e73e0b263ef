/*! Model Service boundary.

The model itself (architecture, checkpoint loading, batching, decoding) is an
external collaborator. This module only fixes the shape of what crosses the
boundary: one [DecodedDocument] per input document, carrying per-sentence
metadata and the raw decoded predictions in sentence-local coordinates.

[replay::ReplayReader] is the shipped implementation, streaming decoder dumps
from a line-delimited JSON file.
!*/
use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

pub mod replay;

pub use replay::ReplayReader;

/// Raw entity tags, one list per sentence: (start, end, label).
pub type RawNer = Vec<Vec<(usize, usize, String)>>;

/// Raw relations, one list per sentence: two span boundary pairs and a label.
pub type RawRelations = Vec<Vec<(usize, usize, usize, usize, String)>>;

/// Raw coreference clusters: a batch wrapper (must be length 1) around
/// clusters of document-global (start, end) spans.
pub type RawCoref = Vec<Vec<Vec<(usize, usize)>>>;

/// Raw event predictions, one entry per sentence.
pub type RawEvents = Vec<RawEventSentence>;

/// Decoded events of a single sentence, in sentence-local coordinates.
///
/// Arguments reference their trigger by local offset; the composite
/// (trigger, span) key is an explicit record rather than a tuple-keyed map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawEventSentence {
    /// Local trigger token offset to trigger label.
    ///
    /// JSON object keys are strings, and the flattened [DecodedTasks] buffer
    /// loses serde_json's native string-to-integer key conversion, so the
    /// keys are parsed explicitly.
    #[serde(deserialize_with = "triggers_from_string_keys")]
    pub triggers: BTreeMap<usize, String>,
    #[serde(default)]
    pub arguments: Vec<RawArgument>,
}

fn triggers_from_string_keys<'de, D>(de: D) -> Result<BTreeMap<usize, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(de)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<usize>()
                .map(|k| (k, v))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

/// One candidate argument of one trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArgument {
    /// Local offset of the trigger this argument attaches to.
    pub trigger: usize,
    /// Local (start, end) span of the argument.
    pub span: (usize, usize),
    pub role: String,
    pub score: f64,
}

/// Per-sentence metadata the decoder emits alongside predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceMeta {
    pub doc_key: String,
    pub sentence_length: usize,
}

/// Raw decoded output for whichever tasks the model produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DecodedTasks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coref: Option<RawCoref>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ner: Option<RawNer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RawRelations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<RawEvents>,
}

/// One document's worth of decoder output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedDocument {
    pub metadata: Vec<SentenceMeta>,
    #[serde(flatten)]
    pub tasks: DecodedTasks,
    /// Raw model scores, kept opaque for the score dumper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Value>,
}

impl DecodedDocument {
    /// The single document key shared by all sentence metadata entries.
    ///
    /// More than one distinct key in a batch means the decoder handed us
    /// sentences from different documents, which is fatal.
    pub fn doc_key(&self) -> Result<&str, Error> {
        if self.metadata.is_empty() {
            return Err(Error::Custom(
                "decoded document has no sentence metadata".to_string(),
            ));
        }
        if !self.metadata.iter().map(|m| &m.doc_key).all_equal() {
            let keys = self
                .metadata
                .iter()
                .map(|m| m.doc_key.clone())
                .unique()
                .collect();
            return Err(Error::AmbiguousDocKey(keys));
        }
        Ok(&self.metadata[0].doc_key)
    }

    pub fn sentence_lengths(&self) -> Vec<usize> {
        self.metadata.iter().map(|m| m.sentence_length).collect()
    }
}

/// Anything that streams decoded documents in deterministic single-pass order.
pub trait ModelService: Iterator<Item = Result<DecodedDocument, Error>> {}

impl<T> ModelService for T where T: Iterator<Item = Result<DecodedDocument, Error>> {}
