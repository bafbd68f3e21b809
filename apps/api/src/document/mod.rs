// CV document core: data model, edit tracking, list mutations, in-place editing.
// Everything here is synchronous and owned by one `EditorSession`.

pub mod editable;
pub mod example;
pub mod lists;
pub mod model;
pub mod name;
pub mod photo;
pub mod session;
pub mod tracker;

use thiserror::Error;

use crate::document::model::{Collection, EntryId, ListField};

pub use editable::{BlurOutcome, EditableRegion, FieldBinding};
pub use session::EditorSession;
pub use tracker::{EditKey, EditTracker};

/// Rejected edits. None of these leave the document partially modified.
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("{field:?} has {len} items, index {index} is out of range")]
    IndexOutOfRange {
        field: ListField,
        index: usize,
        len: usize,
    },

    #[error("No {} entry with id {id}", collection.as_str())]
    UnknownEntry { collection: Collection, id: EntryId },

    #[error("Unknown list '{0}'")]
    UnknownListField(String),

    #[error("No photo to reposition")]
    PhotoMissing,

    #[error("No photo drag in progress")]
    NoActiveDrag,
}
