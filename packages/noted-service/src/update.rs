use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use noted_domain::AuthorDraft;
use noted_storage::queries;

use crate::{Error, NoteBody, NotesService, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
	pub title: Option<String>,
	pub content: Option<String>,
	pub author: Option<AuthorDraft>,
}

impl NotesService {
	/// Applies the provided fields to one note and returns the full updated
	/// note. Omitted (or blank) fields are left unchanged; an empty patch is
	/// a no-op that still resolves the note.
	pub async fn update(&self, raw_id: &str, req: UpdateNoteRequest) -> Result<NoteBody> {
		let id = self.parse_id(raw_id)?;
		let mut tx = self.db.pool.begin().await?;
		let Some(mut row) = queries::fetch_note_for_update(&mut tx, &id.to_string()).await? else {
			return Err(Error::NotFound { message: format!("No note with id {id}.") });
		};
		let mut changed = false;

		if let Some(title) = provided(req.title)
			&& title != row.title
		{
			row.title = title;
			changed = true;
		}
		if let Some(content) = provided(req.content)
			&& content != row.content
		{
			row.content = content;
			changed = true;
		}
		if let Some(AuthorDraft { name, email }) = req.author {
			if let Some(name) = provided(name)
				&& name != row.author_name
			{
				row.author_name = name;
				changed = true;
			}
			if let Some(email) = provided(email)
				&& email != row.author_email
			{
				row.author_email = email;
				changed = true;
			}
		}

		if !changed {
			tx.commit().await?;

			return Ok(NoteBody::from(row));
		}

		row.updated_at = OffsetDateTime::now_utc();

		queries::persist_note_update(&mut tx, &row).await?;
		tx.commit().await?;

		tracing::debug!(%id, "Updated note.");

		Ok(NoteBody::from(row))
	}
}

// A patch value must carry something other than whitespace to count; the
// required-field invariant holds across updates.
fn provided(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}
