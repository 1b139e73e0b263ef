//! Gold document types.
mod document;

pub use document::Document;
