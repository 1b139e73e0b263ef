/*! Task cleaners.

Each extraction task the model decodes (coreference, entity tagging,
relations, events) gets one cleaner that re-projects the raw sentence-local
output into document-global coordinates and normalizes its shape for the
output schema.
!*/
use crate::error::Error;
use crate::offsets::SentenceOffsets;

mod coref;
mod event;
mod ner;
mod relation;

pub use coref::CorefCleaner;
pub use event::{EventCleaner, EventEntry};
pub use ner::NerCleaner;
pub use relation::RelationCleaner;

/// The closed set of extraction tasks a decoded document may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Coref,
    Ner,
    Relation,
    Events,
}

impl Task {
    pub const ALL: [Task; 4] = [Task::Coref, Task::Ner, Task::Relation, Task::Events];

    /// Field name the cleaned output is stored under in the merged result.
    pub fn output_field(self) -> &'static str {
        match self {
            Task::Coref => "predicted_clusters",
            Task::Ner => "predicted_ner",
            Task::Relation => "predicted_relations",
            Task::Events => "predicted_events",
        }
    }
}

/// One task's cleaning pass.
///
/// A cleaner checks structural alignment between its raw input and the
/// offset table, then rewrites every span into document coordinates.
/// Alignment failures are fatal input errors, never recovered locally.
pub trait Clean {
    type Raw;
    type Cleaned;

    fn clean(&self, raw: &Self::Raw, offsets: &SentenceOffsets)
        -> Result<Self::Cleaned, Error>;
}

/// Shared per-sentence alignment precondition.
fn check_alignment(task: &'static str, got: usize, offsets: &SentenceOffsets) -> Result<(), Error> {
    if got != offsets.len() {
        return Err(Error::LengthMismatch {
            task,
            expected: offsets.len(),
            got,
        });
    }
    Ok(())
}
