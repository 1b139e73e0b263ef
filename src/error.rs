//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),
    /// Coreference decoder output must be a batch of size exactly 1.
    CorefBatchSize(usize),
    /// A task's raw decoded output does not have one entry per sentence.
    LengthMismatch {
        task: &'static str,
        expected: usize,
        got: usize,
    },
    /// A per-sentence-aligned field of a merged result has the wrong outer length.
    FieldLength {
        doc_key: String,
        field: String,
        expected: usize,
        got: usize,
    },
    /// A sentence index points past the end of the offset table.
    SentenceOutOfRange {
        index: usize,
        sentences: usize,
    },
    /// A projected token offset points past the end of the document.
    TokenOutOfRange {
        global: usize,
        total_tokens: usize,
    },
    /// A score batch carries more than one distinct document key.
    AmbiguousDocKey(Vec<String>),
    /// Gold record and decoded document disagree on identity.
    DocKeyMismatch {
        gold: String,
        predicted: String,
    },
    /// Gold stream and model stream ended at different lengths.
    StreamDesync {
        consumed: usize,
        exhausted: &'static str,
    },
    /// A path that should be a directory is not one.
    NotADirectory(PathBuf),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
