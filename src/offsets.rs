/*! Sentence offset table.

Decoded predictions come back in sentence-local token coordinates.
The offset table holds, for each sentence, the number of tokens in all
preceding sentences, so that a local offset can be projected into
document-global coordinates with a single addition.
!*/
use crate::error::Error;

/// Exclusive prefix sums of per-sentence token counts.
///
/// For sentence lengths `[5, 3, 7]` the table is `[0, 5, 8]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceOffsets {
    starts: Vec<usize>,
    total_tokens: usize,
}

impl SentenceOffsets {
    /// Build the table from per-sentence token counts.
    pub fn from_lengths(lengths: &[usize]) -> Self {
        let mut starts = Vec::with_capacity(lengths.len());
        let mut running = 0;
        for len in lengths {
            starts.push(running);
            running += len;
        }
        Self {
            starts,
            total_tokens: running,
        }
    }

    /// Number of sentences covered by the table.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Total token count of the document.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Project a sentence-local token offset into document coordinates.
    ///
    /// An out-of-range sentence index, or a projected offset past the last
    /// token of the document, means the predictions and the offset table
    /// disagree about document structure, so both propagate as errors.
    pub fn globalize(&self, local: usize, sentence_ix: usize) -> Result<usize, Error> {
        let start = self
            .starts
            .get(sentence_ix)
            .ok_or(Error::SentenceOutOfRange {
                index: sentence_ix,
                sentences: self.starts.len(),
            })?;
        let global = local + start;
        if global >= self.total_tokens {
            return Err(Error::TokenOutOfRange {
                global,
                total_tokens: self.total_tokens,
            });
        }
        Ok(global)
    }

    /// Project both ends of an inclusive (start, end) span.
    pub fn globalize_span(
        &self,
        span: (usize, usize),
        sentence_ix: usize,
    ) -> Result<(usize, usize), Error> {
        Ok((
            self.globalize(span.0, sentence_ix)?,
            self.globalize(span.1, sentence_ix)?,
        ))
    }
}
