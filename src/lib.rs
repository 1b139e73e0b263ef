//! # respan
//!
//! respan takes the raw per-sentence output of a trained
//! information-extraction model (entities, relations, coreference clusters,
//! events), re-projects every span into document-global token coordinates,
//! merges the predictions back into the gold documents and writes the result
//! as line-delimited JSON matching the input schema.
//!
//! The model itself lives behind the [model::ModelService] boundary; this
//! crate owns the deterministic half: offset arithmetic, task cleaning,
//! result assembly and structural validation.
pub mod assemble;
pub mod cleaners;
pub mod cli;
pub mod doc;
pub mod error;
pub mod io;
pub mod model;
pub mod offsets;
pub mod pipeline;
pub mod scores;
