mod db;
pub use db::{Connection, Database};

mod error;
pub use error::{Error, Result};

mod row;
pub use row::{Row, Rows};

mod statement;
pub use statement::Statement;

mod transaction;
pub use transaction::{DropBehavior, Transaction, TransactionBehavior};

mod value;
pub use value::Value;

pub use griddle_macros::{Entity, FromRow};

// Re-exported so generated code and downstream crates agree on the scalar
// types without declaring the dependencies themselves.
pub use chrono;
pub use uuid;
