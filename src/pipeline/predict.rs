/*! Prediction pipeline.

Walks the gold dataset and the model's decoded-document stream in lockstep,
assembling one merged result per document and appending it to the output
file. Any structural disagreement between the two streams aborts the run.
!*/
use std::fs;
use std::path::PathBuf;

use itertools::{EitherOrBoth, Itertools};
use log::{debug, info, warn};

use crate::assemble::assemble;
use crate::error::Error;
use crate::io::reader::load_gold;
use crate::io::ResultWriter;
use crate::model::{ModelService, ReplayReader};
use crate::offsets::SentenceOffsets;
use crate::scores::dump_scores;

/// One prediction run: archive in, merged results out.
pub struct Prediction {
    archive: PathBuf,
    src: PathBuf,
    dst: PathBuf,
    device: i32,
    score_dir: Option<PathBuf>,
}

impl Prediction {
    pub fn new(
        archive: PathBuf,
        src: PathBuf,
        dst: PathBuf,
        device: i32,
        score_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            archive,
            src,
            dst,
            device,
            score_dir,
        }
    }

    /// Run the pipeline to completion, replaying the archive at `archive`.
    pub fn run(&self) -> Result<(), Error> {
        // The replay service has no device placement; the selector is kept
        // for interface parity with a live model backend.
        debug!("device selector: {}", self.device);
        let service = ReplayReader::from_path(&self.archive)?;
        self.run_with(service)
    }

    /// Run the pipeline against any decoded-document stream.
    ///
    /// Documents are processed strictly sequentially, in file order.
    pub fn run_with<S>(&self, service: S) -> Result<(), Error>
    where
        S: ModelService,
    {
        if let Some(dir) = &self.score_dir {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            } else if !dir.is_dir() {
                return Err(Error::NotADirectory(dir.clone()));
            }
        }

        info!("loading gold dataset from {:?}", self.src);
        let gold = load_gold(&self.src)?;
        info!("{} gold documents loaded", gold.len());

        let mut writer = ResultWriter::to_path(&self.dst)?;
        let mut written = 0usize;

        for pair in gold.into_iter().zip_longest(service) {
            let (gold_doc, decoded) = match pair {
                EitherOrBoth::Both(gold_doc, decoded) => (gold_doc, decoded?),
                EitherOrBoth::Left(_) => {
                    return Err(Error::StreamDesync {
                        consumed: written,
                        exhausted: "model",
                    })
                }
                EitherOrBoth::Right(_) => {
                    return Err(Error::StreamDesync {
                        consumed: written,
                        exhausted: "gold",
                    })
                }
            };

            let doc_key = decoded.doc_key()?.to_string();
            if gold_doc.doc_key() != doc_key {
                return Err(Error::DocKeyMismatch {
                    gold: gold_doc.doc_key().to_string(),
                    predicted: doc_key,
                });
            }
            debug!("[{}] assembling", doc_key);

            if let Some(dir) = &self.score_dir {
                match &decoded.scores {
                    Some(scores) => {
                        dump_scores(&decoded, scores, dir)?;
                    }
                    None => {
                        warn!("[{}] score dump requested but stream has no scores", doc_key)
                    }
                }
            }

            let offsets = SentenceOffsets::from_lengths(&decoded.sentence_lengths());
            let res = assemble(gold_doc, &decoded.tasks, &offsets)?;
            writer.write(&res)?;
            written += 1;
        }

        writer.flush()?;
        info!("wrote {} merged documents to {:?}", written, self.dst);
        Ok(())
    }
}
