//! Statement-text builders for the generated repository.
//!
//! All functions are deterministic over the schema: the same input always
//! produces byte-identical text.

use crate::schema::{ColumnSpec, Entity};

pub(super) fn create_table(entity: &Entity) -> String {
    let columns = entity
        .columns
        .iter()
        .map(column_def)
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE IF NOT EXISTS {} ({})", entity.table, columns)
}

fn column_def(column: &ColumnSpec) -> String {
    let mut def = format!("{} {}", column.name, column.sql_type.as_str());

    if column.primary_key {
        def.push_str(" PRIMARY KEY");
        if column.auto_increment {
            def.push_str(" AUTOINCREMENT");
        }
    } else if !column.ty.nullable {
        def.push_str(" NOT NULL");
    }

    if let Some(default) = &column.default {
        def.push_str(" DEFAULT ");
        def.push_str(default);
    }

    def
}

pub(super) fn insert(entity: &Entity) -> String {
    let columns: Vec<&str> = entity
        .insert_columns()
        .map(|column| column.name.as_str())
        .collect();

    if columns.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES", entity.table);
    }

    let placeholders = vec!["?"; columns.len()].join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        entity.table,
        columns.join(", "),
        placeholders
    )
}

pub(super) fn update(entity: &Entity, key: &ColumnSpec) -> String {
    let assignments = entity
        .update_columns()
        .map(|column| format!("{} = ?", column.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        entity.table, assignments, key.name
    )
}

pub(super) fn delete(entity: &Entity, key: &ColumnSpec) -> String {
    format!("DELETE FROM {} WHERE {} = ?", entity.table, key.name)
}

pub(super) fn select_all(entity: &Entity) -> String {
    format!("SELECT {} FROM {}", column_list(entity), entity.table)
}

pub(super) fn select_by_id(entity: &Entity, key: &ColumnSpec) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(entity),
        entity.table,
        key.name
    )
}

pub(super) fn count(entity: &Entity) -> String {
    format!("SELECT COUNT(*) FROM {}", entity.table)
}

fn column_list(entity: &Entity) -> String {
    entity
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
