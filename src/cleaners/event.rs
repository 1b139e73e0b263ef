//! Event cleaning.
use serde::{Deserialize, Serialize};

use crate::cleaners::{check_alignment, Clean};
use crate::error::Error;
use crate::model::RawEvents;
use crate::offsets::SentenceOffsets;

/// One entry of a serialized event record.
///
/// An event renders as `[[trigger, label], [start, end, role, score], ...]`:
/// a trigger entry first, then one argument entry per attached argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventEntry {
    Trigger(usize, String),
    Argument(usize, usize, String, f64),
}

/// Globalizes triggers and argument spans, grouping arguments under their
/// trigger in a deterministic order.
pub struct EventCleaner;

impl Clean for EventCleaner {
    type Raw = RawEvents;
    type Cleaned = Vec<Vec<Vec<EventEntry>>>;

    fn clean(
        &self,
        raw: &Self::Raw,
        offsets: &SentenceOffsets,
    ) -> Result<Self::Cleaned, Error> {
        check_alignment("events", raw.len(), offsets)?;

        let mut res = Vec::with_capacity(raw.len());
        for (sentence_ix, sentence) in raw.iter().enumerate() {
            let mut res_sentence = Vec::with_capacity(sentence.triggers.len());
            for (&trigger_ix, trigger_label) in &sentence.triggers {
                let global_trigger = offsets.globalize(trigger_ix, sentence_ix)?;

                let mut args = Vec::new();
                for arg in sentence.arguments.iter().filter(|a| a.trigger == trigger_ix) {
                    let (start, end) = offsets.globalize_span(arg.span, sentence_ix)?;
                    args.push((start, end, arg.role.clone(), arg.score));
                }
                // Deterministic output, independent of argument input order.
                args.sort_by_key(|&(start, ..)| start);

                let mut event = Vec::with_capacity(1 + args.len());
                event.push(EventEntry::Trigger(global_trigger, trigger_label.clone()));
                event.extend(
                    args.into_iter()
                        .map(|(s, e, role, score)| EventEntry::Argument(s, e, role, score)),
                );
                res_sentence.push(event);
            }
            res.push(res_sentence);
        }
        Ok(res)
    }
}
