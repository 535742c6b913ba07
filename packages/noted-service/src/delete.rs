use noted_storage::queries;

use crate::{Error, NotesService, Result};

impl NotesService {
	/// Removes one note permanently. Later calls on the same id fail as
	/// not-found.
	pub async fn delete(&self, raw_id: &str) -> Result<()> {
		let id = self.parse_id(raw_id)?;

		if !queries::delete_note(&self.db, &id.to_string()).await? {
			return Err(Error::NotFound { message: format!("No note with id {id}.") });
		}

		tracing::debug!(%id, "Deleted note.");

		Ok(())
	}
}
