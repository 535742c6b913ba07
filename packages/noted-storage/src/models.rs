use time::OffsetDateTime;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct NoteRow {
	pub id: String,
	pub title: String,
	pub content: String,
	pub author_name: String,
	pub author_email: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
