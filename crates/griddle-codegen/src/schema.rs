mod column;
pub(crate) use column::{EntityColumnAttr, ResultColumnAttr};

mod entity;
pub(crate) use entity::{ColumnSpec, Entity};

mod entity_attr;
pub(crate) use entity_attr::EntityAttr;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod key;
pub(crate) use key::KeyAttr;

mod name;
pub(crate) use name::{column_name, table_name};

mod result;
pub(crate) use result::ResultShape;

mod row_attr;
pub(crate) use row_attr::RowAttr;

mod ty;
pub(crate) use ty::{BindMode, ColumnTy, Scalar, SqlType};
