//! Entity tag cleaning.
use crate::cleaners::{check_alignment, Clean};
use crate::error::Error;
use crate::model::RawNer;
use crate::offsets::SentenceOffsets;

/// Globalizes entity tag spans, keeping per-sentence partitioning and order.
pub struct NerCleaner;

impl Clean for NerCleaner {
    type Raw = RawNer;
    type Cleaned = Vec<Vec<(usize, usize, String)>>;

    fn clean(
        &self,
        raw: &Self::Raw,
        offsets: &SentenceOffsets,
    ) -> Result<Self::Cleaned, Error> {
        check_alignment("ner", raw.len(), offsets)?;

        let mut res = Vec::with_capacity(raw.len());
        for (sentence_ix, sentence) in raw.iter().enumerate() {
            let mut res_sentence = Vec::with_capacity(sentence.len());
            for (start, end, label) in sentence {
                let (start, end) = offsets.globalize_span((*start, *end), sentence_ix)?;
                res_sentence.push((start, end, label.clone()));
            }
            res.push(res_sentence);
        }
        Ok(res)
    }
}
