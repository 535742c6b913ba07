pub mod id;
pub mod pagination;
pub mod validate;

pub use id::{NoteId, ParseNoteIdError};
pub use validate::{Author, AuthorDraft, NoteDraft, ValidNote};
