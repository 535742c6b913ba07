use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use uuid::Uuid;

const ID_BYTES: usize = 12;
const ID_CHARS: usize = ID_BYTES * 2;

/// 24-character lowercase hex note identifier.
///
/// Layout: 4 big-endian bytes of unix seconds followed by 8 random bytes.
/// The all-zero value is syntactically valid but never assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId([u8; ID_BYTES]);

impl NoteId {
	pub fn generate() -> Self {
		Self::generate_at(OffsetDateTime::now_utc())
	}

	pub fn generate_at(at: OffsetDateTime) -> Self {
		let seconds = at.unix_timestamp().clamp(0, i64::from(u32::MAX)) as u32;
		let mut bytes = [0_u8; ID_BYTES];

		bytes[..4].copy_from_slice(&seconds.to_be_bytes());
		bytes[4..].copy_from_slice(&Uuid::new_v4().as_bytes()[..8]);

		Self(bytes)
	}

	/// Unix seconds recorded in the id prefix.
	pub fn timestamp_seconds(&self) -> u32 {
		let mut prefix = [0_u8; 4];

		prefix.copy_from_slice(&self.0[..4]);

		u32::from_be_bytes(prefix)
	}

	pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
		&self.0
	}
}

impl fmt::Display for NoteId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.0 {
			write!(f, "{byte:02x}")?;
		}

		Ok(())
	}
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid note id: {0:?}.")]
pub struct ParseNoteIdError(pub String);

impl FromStr for NoteId {
	type Err = ParseNoteIdError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let chars = raw.as_bytes();

		if chars.len() != ID_CHARS {
			return Err(ParseNoteIdError(raw.to_string()));
		}

		let mut bytes = [0_u8; ID_BYTES];

		for (index, pair) in chars.chunks_exact(2).enumerate() {
			let hi = hex_value(pair[0]).ok_or_else(|| ParseNoteIdError(raw.to_string()))?;
			let lo = hex_value(pair[1]).ok_or_else(|| ParseNoteIdError(raw.to_string()))?;

			bytes[index] = (hi << 4) | lo;
		}

		Ok(Self(bytes))
	}
}

fn hex_value(byte: u8) -> Option<u8> {
	match byte {
		b'0'..=b'9' => Some(byte - b'0'),
		b'a'..=b'f' => Some(byte - b'a' + 10),
		b'A'..=b'F' => Some(byte - b'A' + 10),
		_ => None,
	}
}

impl Serialize for NoteId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for NoteId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		raw.parse().map_err(serde::de::Error::custom)
	}
}
