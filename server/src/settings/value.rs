//! Validation and coercion of stored setting values.
//!
//! Stored values are text; the declared [`TypeTag`] says what they must
//! parse as. Validation (admin write time) and coercion (read time) share
//! one code path, so any value that validates also coerces.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::prelude::*;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A coerced setting value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedScalar {
	Text(Box<str>),
	Bool(bool),
	Int(i64),
	Float(f64),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
}

/// Pure validator/coercer for setting values.
#[derive(Clone, Copy, Debug)]
pub struct ValueCodec {
	/// Legacy boolean coercion: any non-empty text is true and validation
	/// never fails. The default is a strict token allow-list.
	lenient_bool: bool,
}

impl ValueCodec {
	pub fn new(lenient_bool: bool) -> Self {
		ValueCodec { lenient_bool }
	}

	pub fn validate(&self, value: &str, typ: TypeTag) -> Result<(), ValidationError> {
		self.coerce(value, typ).map(|_| ())
	}

	pub fn coerce(&self, value: &str, typ: TypeTag) -> Result<TypedScalar, ValidationError> {
		match typ {
			TypeTag::Unicode => Ok(TypedScalar::Text(value.into())),
			TypeTag::Boolean => self.coerce_bool(value).map(TypedScalar::Bool),
			TypeTag::Integer => value
				.parse::<i64>()
				.map(TypedScalar::Int)
				.map_err(|_| ValidationError::NotAnInteger),
			TypeTag::Float => value
				.parse::<f64>()
				.map(TypedScalar::Float)
				.map_err(|_| ValidationError::NotAFloat),
			TypeTag::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
				.map(TypedScalar::Date)
				.map_err(|_| ValidationError::BadDate),
			TypeTag::DateTime => NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
				.map(TypedScalar::DateTime)
				.map_err(|_| ValidationError::BadDateTime),
		}
	}

	fn coerce_bool(&self, value: &str) -> Result<bool, ValidationError> {
		if self.lenient_bool {
			return Ok(!value.is_empty());
		}
		match value.trim().to_ascii_lowercase().as_str() {
			"1" | "true" | "yes" | "on" => Ok(true),
			"0" | "false" | "no" | "off" => Ok(false),
			_ => Err(ValidationError::NotABoolean),
		}
	}
}

impl Default for ValueCodec {
	fn default() -> Self {
		ValueCodec::new(false)
	}
}


// vim: ts=4
