//! Error taxonomy shared by the server and the storage adapters.

use axum::{http::StatusCode, response::IntoResponse};

pub type SkResult<T> = std::result::Result<T, Error>;

/// A stored setting value failed the typed parse for its declared type tag.
///
/// These are admin-facing: the message is shown next to the rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	NotAnInteger,
	NotABoolean,
	NotAFloat,
	BadDate,
	BadDateTime,
}

impl ValidationError {
	pub fn message(&self) -> &'static str {
		match self {
			ValidationError::NotAnInteger => "value needs to be an integer",
			ValidationError::NotABoolean => {
				"value needs to be a boolean (one of: 1/0, true/false, yes/no, on/off)"
			}
			ValidationError::NotAFloat => "value needs to be a float",
			ValidationError::BadDate => {
				"value needs to be a date in the format YYYY-MM-DD, e.g. 2010-01-31"
			}
			ValidationError::BadDateTime => {
				"value needs to be a datetime in the format YYYY-MM-DD HH:MM:SS, e.g. 2010-01-31 09:26:35"
			}
		}
	}
}

impl std::fmt::Display for ValidationError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum Error {
	NotFound,
	DbError,
	Validation(ValidationError),
	/// A malformed regular expression in a page include/exclude list.
	BadPattern(String),
	BadRequest(&'static str),
	Config(&'static str),

	// externals
	Io(std::io::Error),
}

impl From<ValidationError> for Error {
	fn from(err: ValidationError) -> Self {
		Self::Validation(err)
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::Validation(err) => write!(f, "{}", err),
			Error::BadPattern(msg) => write!(f, "bad page pattern: {}", msg),
			Error::BadRequest(msg) => write!(f, "bad request: {}", msg),
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
			Error::Validation(err) => {
				(StatusCode::UNPROCESSABLE_ENTITY, err.message()).into_response()
			}
			Error::BadPattern(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg).into_response(),
			Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
			_ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
		}
	}
}

// vim: ts=4
