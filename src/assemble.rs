/*! Result assembly.

Routes each decoded task through its cleaner, overlays the cleaned output on
the gold record, strips transient bookkeeping fields and validates that the
merged result is still shaped like the document it came from.
!*/
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cleaners::{Clean, CorefCleaner, EventCleaner, NerCleaner, RelationCleaner, Task};
use crate::doc::Document;
use crate::error::Error;
use crate::model::DecodedTasks;
use crate::offsets::SentenceOffsets;

/// Fields that are not aligned one-to-one with sentences.
const EXEMPT_FIELDS: [&str; 4] = ["doc_key", "clusters", "predicted_clusters", "doc_id"];

/// Bookkeeping fields stripped from the merged output.
const TRANSIENT_FIELDS: [&str; 1] = ["dataset"];

/// Merge cleaned predictions into the gold record.
///
/// Offsets are applied exactly once, inside the cleaners; gold fields
/// (including already-globalized `predicted_*` fields from a previous run)
/// pass through untouched.
pub fn assemble(
    gold: Document,
    decoded: &DecodedTasks,
    offsets: &SentenceOffsets,
) -> Result<Map<String, Value>, Error> {
    let doc_key = gold.doc_key().to_string();
    let n_sentences = gold.n_sentences();
    let mut res = gold.into_object()?;

    for task in Task::ALL {
        let cleaned = match task {
            Task::Coref => clean_opt(&CorefCleaner, decoded.coref.as_ref(), offsets)?,
            Task::Ner => clean_opt(&NerCleaner, decoded.ner.as_ref(), offsets)?,
            Task::Relation => clean_opt(&RelationCleaner, decoded.relation.as_ref(), offsets)?,
            Task::Events => clean_opt(&EventCleaner, decoded.events.as_ref(), offsets)?,
        };
        if let Some(value) = cleaned {
            res.insert(task.output_field().to_string(), value);
        }
    }

    for field in TRANSIENT_FIELDS {
        res.remove(field);
    }

    check_lengths(&doc_key, &res, n_sentences)?;
    Ok(res)
}

/// Run one cleaner over a task's raw output, if the model produced any.
fn clean_opt<C>(
    cleaner: &C,
    raw: Option<&C::Raw>,
    offsets: &SentenceOffsets,
) -> Result<Option<Value>, Error>
where
    C: Clean,
    C::Cleaned: Serialize,
{
    match raw {
        Some(raw) => {
            let cleaned = cleaner.clean(raw, offsets)?;
            Ok(Some(serde_json::to_value(cleaned)?))
        }
        None => Ok(None),
    }
}

/// Every per-sentence-aligned field must have one outer entry per sentence.
fn check_lengths(
    doc_key: &str,
    res: &Map<String, Value>,
    n_sentences: usize,
) -> Result<(), Error> {
    for (field, value) in res {
        if EXEMPT_FIELDS.contains(&field.as_str()) {
            continue;
        }
        match value {
            Value::Array(entries) if entries.len() == n_sentences => (),
            Value::Array(entries) => {
                return Err(Error::FieldLength {
                    doc_key: doc_key.to_string(),
                    field: field.clone(),
                    expected: n_sentences,
                    got: entries.len(),
                })
            }
            _ => {
                return Err(Error::Custom(format!(
                    "[{}] field `{}` is not a per-sentence array",
                    doc_key, field
                )))
            }
        }
    }
    Ok(())
}
