use noted_storage::queries;

use crate::{Error, NoteBody, NotesService, Result};

impl NotesService {
	pub async fn get(&self, raw_id: &str) -> Result<NoteBody> {
		let id = self.parse_id(raw_id)?;
		let Some(row) = queries::fetch_note(&self.db, &id.to_string()).await? else {
			return Err(Error::NotFound { message: format!("No note with id {id}.") });
		};

		Ok(NoteBody::from(row))
	}
}
