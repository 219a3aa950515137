//! Shared row-mapping helpers for the SQLite adapter.

use sitekit::prelude::*;
use sqlx::sqlite::SqliteRow;

/// Log a database error for debugging.
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a single-row query result, translating SQL errors to SkResult.
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> SkResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Map all rows of a query result, translating errors.
pub(crate) fn map_rows<T, F>(
	rows: Result<Vec<SqliteRow>, sqlx::Error>,
	f: F,
) -> SkResult<Vec<T>>
where
	F: Fn(SqliteRow) -> Result<T, sqlx::Error>,
{
	let rows = rows.inspect_err(inspect).map_err(|_| Error::DbError)?;
	let mut items = Vec::with_capacity(rows.len());
	for row in rows {
		items.push(f(row).inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

// vim: ts=4
