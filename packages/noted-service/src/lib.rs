pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod time_serde;
pub mod update;

mod error;

pub use create::CreateNoteRequest;
pub use error::{Error, Result};
pub use list::ListQuery;
pub use update::UpdateNoteRequest;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use noted_config::Config;
use noted_domain::{Author, NoteId, pagination::PageBounds};
use noted_storage::{db::Db, models::NoteRow};

pub struct NotesService {
	pub cfg: Config,
	pub db: Db,
}
impl NotesService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}

	// The contract only distinguishes "exists" from "does not exist", so ids
	// that do not even parse surface as not-found rather than bad-request.
	fn parse_id(&self, raw: &str) -> Result<NoteId> {
		raw.parse().map_err(|_| Error::InvalidId { id: raw.to_string() })
	}

	fn page_bounds(&self) -> PageBounds {
		PageBounds {
			default_limit: self.cfg.pagination.default_limit,
			max_limit: self.cfg.pagination.max_limit,
		}
	}
}

/// A note as it appears on the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteBody {
	#[serde(rename = "_id")]
	pub id: String,
	pub title: String,
	pub content: String,
	pub author: Author,
	#[serde(rename = "createdAt", with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(rename = "updatedAt", with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

impl From<NoteRow> for NoteBody {
	fn from(row: NoteRow) -> Self {
		Self {
			id: row.id,
			title: row.title,
			content: row.content,
			author: Author { name: row.author_name, email: row.author_email },
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}
