use sqlx::{Postgres, Transaction};

use crate::{Result, db::Db, models::NoteRow};

pub async fn insert_note(db: &Db, row: &NoteRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO notes (id, title, content, author_name, author_email, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7)",
	)
	.bind(row.id.as_str())
	.bind(row.title.as_str())
	.bind(row.content.as_str())
	.bind(row.author_name.as_str())
	.bind(row.author_email.as_str())
	.bind(row.created_at)
	.bind(row.updated_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn fetch_note(db: &Db, id: &str) -> Result<Option<NoteRow>> {
	let row = sqlx::query_as("SELECT * FROM notes WHERE id = $1")
		.bind(id)
		.fetch_optional(&db.pool)
		.await?;

	Ok(row)
}

pub async fn fetch_note_for_update(
	tx: &mut Transaction<'_, Postgres>,
	id: &str,
) -> Result<Option<NoteRow>> {
	let row = sqlx::query_as("SELECT * FROM notes WHERE id = $1 FOR UPDATE")
		.bind(id)
		.fetch_optional(&mut **tx)
		.await?;

	Ok(row)
}

pub async fn persist_note_update(tx: &mut Transaction<'_, Postgres>, row: &NoteRow) -> Result<()> {
	sqlx::query(
		"\
UPDATE notes
SET
	title = $1,
	content = $2,
	author_name = $3,
	author_email = $4,
	updated_at = $5
WHERE id = $6",
	)
	.bind(row.title.as_str())
	.bind(row.content.as_str())
	.bind(row.author_name.as_str())
	.bind(row.author_email.as_str())
	.bind(row.updated_at)
	.bind(row.id.as_str())
	.execute(&mut **tx)
	.await?;

	Ok(())
}

/// Returns the page slice in creation order. The `(created_at, id)` ordering
/// keeps successive slices disjoint even for notes created within the same
/// microsecond.
pub async fn list_notes(db: &Db, limit: i64, offset: i64) -> Result<Vec<NoteRow>> {
	let rows = sqlx::query_as("SELECT * FROM notes ORDER BY created_at, id LIMIT $1 OFFSET $2")
		.bind(limit)
		.bind(offset)
		.fetch_all(&db.pool)
		.await?;

	Ok(rows)
}

/// Returns whether a row was removed.
pub async fn delete_note(db: &Db, id: &str) -> Result<bool> {
	let result = sqlx::query("DELETE FROM notes WHERE id = $1").bind(id).execute(&db.pool).await?;

	Ok(result.rows_affected() > 0)
}

pub async fn delete_all_notes(db: &Db) -> Result<u64> {
	let result = sqlx::query("DELETE FROM notes").execute(&db.pool).await?;

	Ok(result.rows_affected())
}
