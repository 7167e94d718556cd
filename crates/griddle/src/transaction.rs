use crate::{Connection, Result};

/// Options for how a transaction acquires its locks. See [BEGIN
/// TRANSACTION](https://www.sqlite.org/lang_transaction.html) for details.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionBehavior {
    /// The transaction does not actually start until the database is first
    /// accessed.
    Deferred,
    /// Start a write immediately, without waiting for a write statement.
    Immediate,
    /// Prevent other connections from reading the database while the
    /// transaction is underway.
    Exclusive,
}

impl TransactionBehavior {
    pub(crate) fn sql(self) -> &'static str {
        match self {
            TransactionBehavior::Deferred => "BEGIN DEFERRED",
            TransactionBehavior::Immediate => "BEGIN IMMEDIATE",
            TransactionBehavior::Exclusive => "BEGIN EXCLUSIVE",
        }
    }
}

/// Options for how a [`Transaction`] behaves when dropped without an explicit
/// commit or rollback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropBehavior {
    /// Roll back the changes. This is the default.
    Rollback,
    /// Commit the changes.
    Commit,
    /// Leave the transaction open.
    Ignore,
}

/// An open transaction, scoped to this guard.
///
/// Unless committed or rolled back explicitly, dropping the guard applies its
/// [`DropBehavior`] (rollback by default). Errors during that implicit
/// cleanup are ignored; call [`commit`](Self::commit) or
/// [`rollback`](Self::rollback) to observe them.
pub struct Transaction<'conn> {
    connection: &'conn Connection,
    drop_behavior: DropBehavior,
    open: bool,
}

impl<'conn> Transaction<'conn> {
    pub(crate) fn new(connection: &'conn Connection) -> Self {
        Self {
            connection,
            drop_behavior: DropBehavior::Rollback,
            open: true,
        }
    }

    pub fn set_drop_behavior(&mut self, drop_behavior: DropBehavior) {
        self.drop_behavior = drop_behavior;
    }

    pub fn commit(mut self) -> Result<()> {
        self.open = false;
        self.connection.commit()
    }

    pub fn rollback(mut self) -> Result<()> {
        self.open = false;
        self.connection.rollback()
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.open {
            return;
        }
        match self.drop_behavior {
            DropBehavior::Rollback => {
                let _ = self.connection.rollback();
            }
            DropBehavior::Commit => {
                let _ = self.connection.commit();
            }
            DropBehavior::Ignore => {}
        }
    }
}
