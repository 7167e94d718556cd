use std::path::{Path, PathBuf};

use crate::{Error, Result, Statement, Transaction, TransactionBehavior};

/// Where the database lives.
#[derive(Debug)]
pub enum Database {
    File(PathBuf),
    InMemory,
}

impl Database {
    /// An in-memory database; every [`connect`](Self::connect) call creates a
    /// fresh one.
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// A database backed by the file at `path`, created on first connect.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn connect(&self) -> Result<Connection> {
        let inner = match self {
            Database::File(path) => rusqlite::Connection::open(path)?,
            Database::InMemory => rusqlite::Connection::open_in_memory()?,
        };

        Ok(Connection { inner: Some(inner) })
    }
}

/// An open connection to the engine.
///
/// The connection exclusively owns its native handle. It performs no internal
/// locking: sharing one connection across threads is the caller's
/// responsibility to serialize.
#[derive(Debug)]
pub struct Connection {
    inner: Option<rusqlite::Connection>,
}

impl Connection {
    pub fn open_in_memory() -> Result<Self> {
        Database::in_memory().connect()
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Database::open(path).connect()
    }

    fn handle(&self) -> Result<&rusqlite::Connection> {
        self.inner.as_ref().ok_or(Error::ConnectionClosed)
    }

    /// Runs a statement that is not expected to return rows. Returns the
    /// number of rows changed.
    pub fn execute(&self, sql: &str) -> Result<usize> {
        validate_sql(sql)?;
        Ok(self.handle()?.execute(sql, [])?)
    }

    /// Prepares `sql` for binding and execution.
    pub fn prepare(&self, sql: &str) -> Result<Statement<'_>> {
        validate_sql(sql)?;
        Ok(Statement::new(self.handle()?.prepare(sql)?))
    }

    /// Runs a query expected to produce a single integer value, e.g.
    /// `SELECT COUNT(*)`.
    pub fn query_scalar_int(&self, sql: &str) -> Result<i64> {
        let mut stmt = self.prepare(sql)?;
        let mut rows = stmt.query()?;

        match rows.next()? {
            Some(row) => row.get_i64(0),
            None => Err(Error::RecordNotFound),
        }
    }

    /// Runs a query expected to produce a single text value.
    pub fn query_scalar_text(&self, sql: &str) -> Result<String> {
        let mut stmt = self.prepare(sql)?;
        let mut rows = stmt.query()?;

        match rows.next()? {
            Some(row) => row.get_text(0),
            None => Err(Error::RecordNotFound),
        }
    }

    /// Row id generated by the most recent successful INSERT on this
    /// connection.
    pub fn last_insert_rowid(&self) -> Result<i64> {
        Ok(self.handle()?.last_insert_rowid())
    }

    /// True when no explicit transaction is open.
    pub fn is_autocommit(&self) -> Result<bool> {
        Ok(self.handle()?.is_autocommit())
    }

    pub fn begin_transaction(&self, behavior: TransactionBehavior) -> Result<()> {
        self.execute(behavior.sql()).map(|_| ())
    }

    pub fn commit(&self) -> Result<()> {
        self.execute("COMMIT").map(|_| ())
    }

    pub fn rollback(&self) -> Result<()> {
        self.execute("ROLLBACK").map(|_| ())
    }

    /// Begins a transaction scoped to the returned guard. Unless committed,
    /// the guard rolls back when dropped.
    pub fn transaction(&self, behavior: TransactionBehavior) -> Result<Transaction<'_>> {
        self.begin_transaction(behavior)?;
        Ok(Transaction::new(self))
    }

    /// Closes the native handle. Closing an already-closed connection is a
    /// no-op.
    pub fn close(&mut self) -> Result<()> {
        if let Some(inner) = self.inner.take() {
            inner.close().map_err(|(_, err)| Error::from(err))?;
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

fn validate_sql(sql: &str) -> Result<()> {
    if sql.trim().is_empty() {
        return Err(Error::invalid_argument("sql must not be empty"));
    }
    Ok(())
}
