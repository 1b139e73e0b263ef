//! Relation cleaning.
use crate::cleaners::{check_alignment, Clean};
use crate::error::Error;
use crate::model::RawRelations;
use crate::offsets::SentenceOffsets;

/// Globalizes the two boundary pairs of each relation; the label passes
/// through unchanged.
pub struct RelationCleaner;

impl Clean for RelationCleaner {
    type Raw = RawRelations;
    type Cleaned = Vec<Vec<(usize, usize, usize, usize, String)>>;

    fn clean(
        &self,
        raw: &Self::Raw,
        offsets: &SentenceOffsets,
    ) -> Result<Self::Cleaned, Error> {
        check_alignment("relation", raw.len(), offsets)?;

        let mut res = Vec::with_capacity(raw.len());
        for (sentence_ix, sentence) in raw.iter().enumerate() {
            let mut res_sentence = Vec::with_capacity(sentence.len());
            for (s1, e1, s2, e2, label) in sentence {
                let (s1, e1) = offsets.globalize_span((*s1, *e1), sentence_ix)?;
                let (s2, e2) = offsets.globalize_span((*s2, *e2), sentence_ix)?;
                res_sentence.push((s1, e1, s2, e2, label.clone()));
            }
            res.push(res_sentence);
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globalizes_all_four_boundaries() {
        let offsets = SentenceOffsets::from_lengths(&[5, 6]);
        let raw: RawRelations = vec![vec![], vec![(1, 2, 3, 4, "REL".to_string())]];
        let cleaned = RelationCleaner.clean(&raw, &offsets).unwrap();
        assert_eq!(cleaned[1], vec![(6, 7, 8, 9, "REL".to_string())]);
        assert!(cleaned[0].is_empty());
    }

    #[test]
    fn sentence_count_mismatch_is_fatal() {
        let offsets = SentenceOffsets::from_lengths(&[5]);
        let raw: RawRelations = vec![vec![], vec![]];
        assert!(matches!(
            RelationCleaner.clean(&raw, &offsets),
            Err(Error::LengthMismatch { task: "relation", .. })
        ));
    }
}
