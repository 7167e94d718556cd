use crate::{Error, Result, Rows, Value};

/// A prepared statement.
///
/// Parameters are bound by 1-indexed position; the statement either runs to
/// completion with [`execute`](Self::execute) or yields rows through
/// [`query`](Self::query).
pub struct Statement<'conn> {
    stmt: rusqlite::Statement<'conn>,
}

impl<'conn> Statement<'conn> {
    pub(crate) fn new(stmt: rusqlite::Statement<'conn>) -> Self {
        Self { stmt }
    }

    /// Binds `value` at the 1-indexed placeholder `index`.
    pub fn bind(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index == 0 {
            return Err(Error::invalid_argument("bind positions are 1-indexed"));
        }
        self.stmt.raw_bind_parameter(index, value.into())?;
        Ok(())
    }

    /// Binds NULL at the 1-indexed placeholder `index`.
    pub fn bind_null(&mut self, index: usize) -> Result<()> {
        self.bind(index, Value::Null)
    }

    /// Steps the statement to completion, returning the number of rows
    /// changed. Fails if the statement produces rows.
    pub fn execute(&mut self) -> Result<usize> {
        Ok(self.stmt.raw_execute()?)
    }

    /// Runs the statement, yielding its result rows.
    pub fn query(&mut self) -> Result<Rows<'_>> {
        let columns: Vec<String> = self
            .stmt
            .column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        Ok(Rows::new(self.stmt.raw_query(), columns))
    }

    pub fn column_count(&self) -> usize {
        self.stmt.column_count()
    }
}
