use serde::{Deserialize, Serialize};

use noted_domain::pagination;
use noted_storage::queries;

use crate::{NoteBody, NotesService, Result};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ListQuery {
	pub page: Option<u32>,
	pub limit: Option<u32>,
}

impl NotesService {
	/// Returns one page of notes in creation order.
	pub async fn list(&self, query: ListQuery) -> Result<Vec<NoteBody>> {
		let slice = pagination::resolve(query.page, query.limit, self.page_bounds());

		if slice.limit == 0 {
			return Ok(Vec::new());
		}

		let rows =
			queries::list_notes(&self.db, i64::from(slice.limit), i64::from(slice.offset)).await?;

		Ok(rows.into_iter().map(NoteBody::from).collect())
	}
}
