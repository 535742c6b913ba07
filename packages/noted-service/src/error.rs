pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Missing required fields: {fields:?}.")]
	Validation { fields: Vec<String> },
	#[error("Invalid note id: {id:?}.")]
	InvalidId { id: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<noted_storage::Error> for Error {
	fn from(err: noted_storage::Error) -> Self {
		match err {
			noted_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			noted_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
