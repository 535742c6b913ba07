use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
	pub name: String,
	pub email: String,
}

/// Author payload as it arrives on the wire. Both fields stay optional so
/// validation can name exactly what is missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AuthorDraft {
	pub name: Option<String>,
	pub email: Option<String>,
}

/// Create payload before validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NoteDraft {
	pub title: Option<String>,
	pub content: Option<String>,
	pub author: Option<AuthorDraft>,
}

/// A draft that passed required-field validation.
#[derive(Clone, Debug)]
pub struct ValidNote {
	pub title: String,
	pub content: String,
	pub author: Author,
}

impl NoteDraft {
	/// Checks the required fields of a create payload. On failure, returns
	/// the JSON paths of every missing field, in document order.
	pub fn validate(self) -> Result<ValidNote, Vec<String>> {
		let mut missing = Vec::new();
		let title = required(self.title);

		if title.is_none() {
			missing.push("$.title".to_string());
		}

		let content = required(self.content);

		if content.is_none() {
			missing.push("$.content".to_string());
		}

		let author = match self.author {
			None => {
				missing.push("$.author".to_string());

				None
			},
			Some(author) => {
				let name = required(author.name);

				if name.is_none() {
					missing.push("$.author.name".to_string());
				}

				let email = required(author.email);

				if email.is_none() {
					missing.push("$.author.email".to_string());
				}

				name.zip(email).map(|(name, email)| Author { name, email })
			},
		};

		match (title, content, author) {
			(Some(title), Some(content), Some(author)) => Ok(ValidNote { title, content, author }),
			_ => Err(missing),
		}
	}
}

// A required string must carry something other than whitespace; the stored
// value keeps its original spelling.
fn required(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}
