use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use noted_domain::{AuthorDraft, NoteDraft, NoteId};
use noted_storage::{models::NoteRow, queries};

use crate::{Error, NoteBody, NotesService, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
	pub title: Option<String>,
	pub content: Option<String>,
	pub author: Option<AuthorDraft>,
}

impl NotesService {
	/// Validates and persists one note, returning it with its assigned id.
	pub async fn create(&self, req: CreateNoteRequest) -> Result<NoteBody> {
		let draft = NoteDraft { title: req.title, content: req.content, author: req.author };
		let note = draft.validate().map_err(|fields| Error::Validation { fields })?;
		let now = OffsetDateTime::now_utc();
		let id = NoteId::generate_at(now);
		let row = NoteRow {
			id: id.to_string(),
			title: note.title,
			content: note.content,
			author_name: note.author.name,
			author_email: note.author.email,
			created_at: now,
			updated_at: now,
		};

		queries::insert_note(&self.db, &row).await?;

		tracing::debug!(%id, "Created note.");

		Ok(NoteBody::from(row))
	}
}
