//! Record store contract and its generic SQLite implementation.
//!
//! # Responsibility
//! - Provide list/get/insert/update/delete over one table, keyed by id.
//! - Keep SQL text and column conversion inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate the record before any SQL runs.
//! - Read paths re-validate rows and reject invalid persisted state instead
//!   of masking it.
//! - List filters only accept columns the table declares.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use chrono::NaiveDate;
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { table: &'static str, id: RecordId },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "{table} record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Equality filters and pagination for [`RecordStore::list`].
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filters: Vec<(&'static str, Value)>,
    pub limit: Option<u32>,
    pub offset: u32,
}

impl ListQuery {
    /// Adds a `column = value` filter.
    pub fn filter(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// CRUD contract over one table keyed by [`RecordId`].
pub trait RecordStore<T> {
    fn insert(&self, record: &T) -> RepoResult<RecordId>;
    fn update(&self, record: &T) -> RepoResult<()>;
    fn get(&self, id: RecordId) -> RepoResult<Option<T>>;
    fn list(&self, query: &ListQuery) -> RepoResult<Vec<T>>;
    fn delete(&self, id: RecordId) -> RepoResult<()>;
}

/// Mapping between a model type and its table.
pub trait TableRecord: Sized {
    const TABLE: &'static str;
    /// Writable columns, excluding `id` and `created_at`.
    const COLUMNS: &'static [&'static str];
    /// `ORDER BY` clause used by list queries.
    const ORDER_BY: &'static str;

    fn id(&self) -> RecordId;
    fn validate_record(&self) -> Result<(), ValidationError>;
    /// Values in [`TableRecord::COLUMNS`] order.
    fn column_values(&self) -> Vec<Value>;
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// SQLite-backed record store for any [`TableRecord`].
pub struct SqliteRecordStore<'conn, T> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> T>,
}

impl<'conn, T: TableRecord> SqliteRecordStore<'conn, T> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!(
            "SELECT id, {}, created_at FROM {}",
            T::COLUMNS.join(", "),
            T::TABLE
        )
    }
}

impl<T: TableRecord> RecordStore<T> for SqliteRecordStore<'_, T> {
    fn insert(&self, record: &T) -> RepoResult<RecordId> {
        record.validate_record()?;

        let placeholders = (1..=T::COLUMNS.len() + 1)
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES ({placeholders});",
            T::TABLE,
            T::COLUMNS.join(", ")
        );

        let mut values = vec![id_value(record.id())];
        values.extend(record.column_values());
        self.conn.execute(&sql, params_from_iter(values))?;

        debug!(
            "event=record_insert module=repo status=ok table={} id={}",
            T::TABLE,
            record.id()
        );
        Ok(record.id())
    }

    fn update(&self, record: &T) -> RepoResult<()> {
        record.validate_record()?;

        let assignments = T::COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments} WHERE id = ?{};",
            T::TABLE,
            T::COLUMNS.len() + 1
        );

        let mut values = record.column_values();
        values.push(id_value(record.id()));
        let changed = self.conn.execute(&sql, params_from_iter(values))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: T::TABLE,
                id: record.id(),
            });
        }

        debug!(
            "event=record_update module=repo status=ok table={} id={}",
            T::TABLE,
            record.id()
        );
        Ok(())
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<T>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1;", Self::select_sql()))?;
        let mut rows = stmt.query([id.to_string()])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(read_validated::<T>(row)?));
        }

        Ok(None)
    }

    fn list(&self, query: &ListQuery) -> RepoResult<Vec<T>> {
        let mut sql = format!("{} WHERE 1 = 1", Self::select_sql());
        let mut bind_values: Vec<Value> = Vec::new();

        for (column, value) in &query.filters {
            if *column != "id" && !T::COLUMNS.contains(column) {
                return Err(RepoError::InvalidData(format!(
                    "unknown filter column `{column}` for table {}",
                    T::TABLE
                )));
            }
            sql.push_str(&format!(" AND {column} = ?"));
            bind_values.push(value.clone());
        }

        sql.push_str(&format!(" ORDER BY {}", T::ORDER_BY));

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(read_validated::<T>(row)?);
        }

        Ok(records)
    }

    fn delete(&self, id: RecordId) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", T::TABLE),
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: T::TABLE,
                id,
            });
        }

        debug!(
            "event=record_delete module=repo status=ok table={} id={}",
            T::TABLE,
            id
        );
        Ok(())
    }
}

fn read_validated<T: TableRecord>(row: &Row<'_>) -> RepoResult<T> {
    let record = T::from_row(row)?;
    record.validate_record()?;
    Ok(record)
}

pub(crate) fn id_value(id: RecordId) -> Value {
    Value::Text(id.to_string())
}

pub(crate) fn optional_id_value(id: Option<RecordId>) -> Value {
    id.map_or(Value::Null, id_value)
}

pub(crate) fn text_value(text: Option<&str>) -> Value {
    text.map_or(Value::Null, |value| Value::Text(value.to_string()))
}

pub(crate) fn date_value(date: NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}

pub(crate) fn optional_date_value(date: Option<NaiveDate>) -> Value {
    date.map_or(Value::Null, date_value)
}

pub(crate) fn read_id(row: &Row<'_>, column: &str) -> RepoResult<RecordId> {
    let text: String = row.get(column)?;
    parse_id(&text, column)
}

pub(crate) fn read_optional_id(row: &Row<'_>, column: &str) -> RepoResult<Option<RecordId>> {
    match row.get::<_, Option<String>>(column)? {
        Some(text) => Ok(Some(parse_id(&text, column)?)),
        None => Ok(None),
    }
}

pub(crate) fn read_date(row: &Row<'_>, column: &str) -> RepoResult<NaiveDate> {
    let text: String = row.get(column)?;
    parse_date(&text, column)
}

pub(crate) fn read_optional_date(row: &Row<'_>, column: &str) -> RepoResult<Option<NaiveDate>> {
    match row.get::<_, Option<String>>(column)? {
        Some(text) => Ok(Some(parse_date(&text, column)?)),
        None => Ok(None),
    }
}

pub(crate) fn parse_id(text: &str, column: &str) -> RepoResult<RecordId> {
    Uuid::parse_str(text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{text}` in {column}")))
}

fn parse_date(text: &str, column: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| RepoError::InvalidData(format!("invalid date value `{text}` in {column}")))
}
