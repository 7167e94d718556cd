use super::{column_name, table_name, ColumnTy, EntityAttr, ErrorSet, Field, SqlType};

/// Extracted description of a persisted row shape.
///
/// Derived once per `#[derive(Entity)]` expansion and immutable afterwards;
/// column order follows declaration order, so the same input always produces
/// the same generated source.
#[derive(Debug)]
pub(crate) struct Entity {
    pub(crate) ident: syn::Ident,
    pub(crate) vis: syn::Visibility,
    pub(crate) table: String,
    pub(crate) columns: Vec<ColumnSpec>,
    /// Index into `columns` of the primary key, if any.
    pub(crate) primary_key: Option<usize>,
    /// `#[skip]` fields, filled with `Default::default()` on row mapping.
    pub(crate) skipped: Vec<syn::Ident>,
    pub(crate) repository: bool,
    pub(crate) create_table: bool,
    pub(crate) async_ops: bool,
}

/// One persisted column.
#[derive(Debug)]
pub(crate) struct ColumnSpec {
    pub(crate) field: syn::Ident,
    pub(crate) field_ty: syn::Type,
    pub(crate) name: String,
    pub(crate) ty: ColumnTy,
    pub(crate) sql_type: SqlType,
    pub(crate) primary_key: bool,
    pub(crate) auto_increment: bool,
    pub(crate) include_in_insert: bool,
    pub(crate) include_in_update: bool,
    /// Raw SQL emitted verbatim as the column's DEFAULT clause.
    pub(crate) default: Option<String>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(fields) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut attr = EntityAttr::default();
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let mut columns: Vec<ColumnSpec> = vec![];
        let mut skipped = vec![];
        let mut primary_key: Option<usize> = None;

        for node in fields.named.iter() {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if field.skip {
                skipped.push(field.ident);
                continue;
            }

            let ty = ColumnTy::from_type(&field.ty);
            let column = field.column.unwrap_or_default();

            let name = match &column.name {
                Some(lit) => lit.value(),
                None => column_name(&field.ident.to_string()),
            };

            if columns.iter().any(|existing| existing.name == name) {
                errs.push(syn::Error::new(
                    field.ident.span(),
                    format!("duplicate column name `{name}`"),
                ));
            }

            let mut is_key = false;
            let mut auto_increment = false;

            if let Some(key) = &field.key {
                if primary_key.is_some() {
                    errs.push(syn::Error::new(
                        key.span,
                        "entity already has a primary key; at most one field may carry #[key]",
                    ));
                } else {
                    if ty.nullable {
                        errs.push(syn::Error::new(key.span, "primary key cannot be an Option"));
                    }
                    if key.auto && !ty.scalar.is_integer() {
                        errs.push(syn::Error::new(
                            key.span,
                            "auto-increment keys must be i32 or i64; use #[key(auto = false)]",
                        ));
                    }

                    is_key = true;
                    auto_increment = key.auto;
                    primary_key = Some(columns.len());
                }
            }

            let include_in_insert = if is_key {
                !auto_increment && !column.skip_insert
            } else {
                !column.skip_insert
            };

            columns.push(ColumnSpec {
                field: field.ident,
                field_ty: field.ty,
                name,
                sql_type: column.ty.unwrap_or_else(|| ty.scalar.sql_type()),
                ty,
                primary_key: is_key,
                auto_increment,
                include_in_insert,
                include_in_update: !is_key && !column.skip_update,
                default: column.default.as_ref().map(|lit| lit.value()),
            });
        }

        if columns.is_empty() {
            errs.push(syn::Error::new_spanned(
                ast,
                "entity must have at least one persisted column",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let table = match &attr.table {
            Some(lit) => lit.value(),
            None => table_name(&ast.ident.to_string()),
        };

        Ok(Self {
            ident: ast.ident.clone(),
            vis: ast.vis.clone(),
            table,
            columns,
            primary_key,
            skipped,
            repository: attr.repository(),
            create_table: attr.create_table(),
            async_ops: attr.async_ops(),
        })
    }

    pub(crate) fn primary_key(&self) -> Option<&ColumnSpec> {
        self.primary_key.map(|index| &self.columns[index])
    }

    pub(crate) fn insert_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns
            .iter()
            .filter(|column| column.include_in_insert)
    }

    pub(crate) fn update_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns
            .iter()
            .filter(|column| column.include_in_update && !column.primary_key)
    }
}
