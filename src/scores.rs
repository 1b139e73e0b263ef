/*! Raw score persistence.

Optional side channel: keeps one raw-score artifact per document so model
outputs can be inspected after a run, keyed by document identifier.
!*/
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;

use crate::error::Error;
use crate::model::DecodedDocument;

/// Persist a document's raw scores under `<score_dir>/<doc_key>.json`.
///
/// All sentence metadata entries of the batch must agree on one document
/// key; disagreement means the batch mixes documents and is fatal.
pub fn dump_scores(
    doc: &DecodedDocument,
    scores: &Value,
    score_dir: &Path,
) -> Result<PathBuf, Error> {
    let doc_key = doc.doc_key()?;
    let dst = score_dir.join(format!("{}.json", doc_key));
    debug!("[{}] dumping raw scores to {:?}", doc_key, dst);

    let handle = File::create(&dst)?;
    serde_json::to_writer_pretty(BufWriter::new(handle), scores)?;
    Ok(dst)
}
