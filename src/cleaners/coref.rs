//! Coreference cluster cleaning.
use crate::cleaners::Clean;
use crate::error::Error;
use crate::model::RawCoref;
use crate::offsets::SentenceOffsets;

/// Unwraps the size-1 batch and renders spans as plain two-element arrays.
///
/// Coreference spans arrive already in document-global coordinates, so no
/// re-projection happens here.
pub struct CorefCleaner;

impl Clean for CorefCleaner {
    type Raw = RawCoref;
    type Cleaned = Vec<Vec<[usize; 2]>>;

    fn clean(
        &self,
        raw: &Self::Raw,
        _offsets: &SentenceOffsets,
    ) -> Result<Self::Cleaned, Error> {
        // The coref decoder supports arbitrary batch sizes; this pipeline
        // only ever feeds it one document at a time.
        if raw.len() != 1 {
            return Err(Error::CorefBatchSize(raw.len()));
        }

        let clusters = &raw[0];
        let res = clusters
            .iter()
            .map(|cluster| cluster.iter().map(|&(s, e)| [s, e]).collect())
            .collect();
        Ok(res)
    }
}
