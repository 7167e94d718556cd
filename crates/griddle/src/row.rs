use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::value::DATETIME_FORMAT;
use crate::{Error, Result};

/// The result rows of a statement.
pub struct Rows<'stmt> {
    rows: rusqlite::Rows<'stmt>,
    columns: Vec<String>,
}

impl<'stmt> Rows<'stmt> {
    pub(crate) fn new(rows: rusqlite::Rows<'stmt>, columns: Vec<String>) -> Self {
        Self { rows, columns }
    }

    /// Advances to the next row.
    pub fn next(&mut self) -> Result<Option<Row<'_>>> {
        match self.rows.next()? {
            Some(row) => Ok(Some(Row {
                row,
                columns: &self.columns,
            })),
            None => Ok(None),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|name| name.as_str())
    }
}

/// A single result row.
///
/// Columns are read by 0-indexed position; name lookup is case-insensitive.
pub struct Row<'a> {
    row: &'a rusqlite::Row<'a>,
    columns: &'a [String],
}

impl Row<'_> {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|name| name.as_str())
    }

    /// Position of the column named `name`, compared case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Like [`column_index`](Self::column_index), but absence is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    pub fn is_null(&self, index: usize) -> Result<bool> {
        Ok(matches!(
            self.row.get_ref(index)?,
            rusqlite::types::ValueRef::Null
        ))
    }

    pub fn get_i32(&self, index: usize) -> Result<i32> {
        Ok(self.row.get(index)?)
    }

    pub fn get_i64(&self, index: usize) -> Result<i64> {
        Ok(self.row.get(index)?)
    }

    pub fn get_f32(&self, index: usize) -> Result<f32> {
        Ok(self.row.get::<_, f64>(index)? as f32)
    }

    pub fn get_f64(&self, index: usize) -> Result<f64> {
        Ok(self.row.get(index)?)
    }

    pub fn get_bool(&self, index: usize) -> Result<bool> {
        let value: i64 = self.row.get(index)?;
        Ok(value != 0)
    }

    pub fn get_text(&self, index: usize) -> Result<String> {
        Ok(self.row.get(index)?)
    }

    pub fn get_blob(&self, index: usize) -> Result<Vec<u8>> {
        Ok(self.row.get(index)?)
    }

    pub fn get_datetime(&self, index: usize) -> Result<NaiveDateTime> {
        let text: String = self.row.get(index)?;
        self.parse_datetime(index, &text)
    }

    pub fn get_uuid(&self, index: usize) -> Result<Uuid> {
        let text: String = self.row.get(index)?;
        self.parse_uuid(index, &text)
    }

    pub fn get_opt_i32(&self, index: usize) -> Result<Option<i32>> {
        Ok(self.row.get(index)?)
    }

    pub fn get_opt_i64(&self, index: usize) -> Result<Option<i64>> {
        Ok(self.row.get(index)?)
    }

    pub fn get_opt_f32(&self, index: usize) -> Result<Option<f32>> {
        Ok(self.row.get::<_, Option<f64>>(index)?.map(|v| v as f32))
    }

    pub fn get_opt_f64(&self, index: usize) -> Result<Option<f64>> {
        Ok(self.row.get(index)?)
    }

    pub fn get_opt_bool(&self, index: usize) -> Result<Option<bool>> {
        Ok(self.row.get::<_, Option<i64>>(index)?.map(|v| v != 0))
    }

    pub fn get_opt_text(&self, index: usize) -> Result<Option<String>> {
        Ok(self.row.get(index)?)
    }

    pub fn get_opt_blob(&self, index: usize) -> Result<Option<Vec<u8>>> {
        Ok(self.row.get(index)?)
    }

    pub fn get_opt_datetime(&self, index: usize) -> Result<Option<NaiveDateTime>> {
        match self.row.get::<_, Option<String>>(index)? {
            Some(text) => Ok(Some(self.parse_datetime(index, &text)?)),
            None => Ok(None),
        }
    }

    pub fn get_opt_uuid(&self, index: usize) -> Result<Option<Uuid>> {
        match self.row.get::<_, Option<String>>(index)? {
            Some(text) => Ok(Some(self.parse_uuid(index, &text)?)),
            None => Ok(None),
        }
    }

    fn parse_datetime(&self, index: usize, text: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
            .map_err(|_| Error::type_conversion(self.name_for(index), "NaiveDateTime"))
    }

    fn parse_uuid(&self, index: usize, text: &str) -> Result<Uuid> {
        Uuid::parse_str(text).map_err(|_| Error::type_conversion(self.name_for(index), "Uuid"))
    }

    fn name_for(&self, index: usize) -> String {
        match self.columns.get(index) {
            Some(name) => name.clone(),
            None => index.to_string(),
        }
    }
}
