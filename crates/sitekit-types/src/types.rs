//! Common types used throughout the sitekit platform.

use serde::{Deserialize, Serialize};

// SiteId //
//********//

/// Internal numeric identifier of a website row.
///
/// `SiteId(0)` is reserved for transient default websites that have no row
/// in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SiteId(pub u32);

impl SiteId {
	/// True for the transient default website, which owns no stored rows.
	pub fn is_transient(&self) -> bool {
		self.0 == 0
	}
}

impl std::fmt::Display for SiteId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for SiteId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_u32(self.0)
	}
}

impl<'de> Deserialize<'de> for SiteId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(SiteId(u32::deserialize(deserializer)?))
	}
}

// TypeTag //
//*********//

/// Declared type of a stored setting value.
///
/// Serialized as the single-letter code used in storage ('U', 'B', 'I',
/// 'F', 'D', 'T').
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTag {
	Unicode,
	Boolean,
	Integer,
	Float,
	Date,
	DateTime,
}

impl TypeTag {
	pub fn code(&self) -> char {
		match self {
			TypeTag::Unicode => 'U',
			TypeTag::Boolean => 'B',
			TypeTag::Integer => 'I',
			TypeTag::Float => 'F',
			TypeTag::Date => 'D',
			TypeTag::DateTime => 'T',
		}
	}

	pub fn from_code(code: char) -> Option<Self> {
		match code {
			'U' => Some(TypeTag::Unicode),
			'B' => Some(TypeTag::Boolean),
			'I' => Some(TypeTag::Integer),
			'F' => Some(TypeTag::Float),
			'D' => Some(TypeTag::Date),
			'T' => Some(TypeTag::DateTime),
			_ => None,
		}
	}
}

impl std::fmt::Display for TypeTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.code())
	}
}

impl Serialize for TypeTag {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_char(self.code())
	}
}

impl<'de> Deserialize<'de> for TypeTag {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let code = String::deserialize(deserializer)?;
		let mut chars = code.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => TypeTag::from_code(c)
				.ok_or_else(|| serde::de::Error::custom(format!("unknown type tag: {}", code))),
			_ => Err(serde::de::Error::custom(format!("unknown type tag: {}", code))),
		}
	}
}


// vim: ts=4
