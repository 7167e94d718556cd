use proc_macro2::TokenStream;
use quote::quote;

use super::{sql, util, Expand};
use crate::schema::{BindMode, ColumnSpec, Scalar};

impl Expand<'_> {
    pub(super) fn expand_repository(&self) -> TokenStream {
        if !self.entity.repository {
            return quote!();
        }

        let vis = &self.entity.vis;
        let griddle = &self.griddle;
        let repository_ident = util::repository_ident(self.entity);

        let create_table = self.expand_create_table();
        let insert = self.expand_insert();
        let keyed = self.expand_keyed_ops();
        let get_all = self.expand_get_all();
        let count = self.expand_count();
        let async_ops = self.expand_async_ops();

        let doc = format!(
            "Data access for [`{}`] rows in the `{}` table.",
            self.entity.ident, self.entity.table
        );

        quote! {
            #[doc = #doc]
            #vis struct #repository_ident<'a> {
                connection: &'a #griddle::Connection,
            }

            impl<'a> #repository_ident<'a> {
                #vis fn new(connection: &'a #griddle::Connection) -> Self {
                    Self { connection }
                }

                #create_table
                #insert
                #keyed
                #get_all
                #count
                #async_ops
            }
        }
    }

    fn expand_create_table(&self) -> TokenStream {
        if !self.entity.create_table {
            return quote!();
        }

        let vis = &self.entity.vis;
        let griddle = &self.griddle;
        let ddl = sql::create_table(self.entity);

        quote! {
            #vis fn create_table(&self) -> #griddle::Result<()> {
                self.connection.execute(#ddl)?;
                Ok(())
            }
        }
    }

    fn expand_insert(&self) -> TokenStream {
        let entity = self.entity;
        let vis = &entity.vis;
        let griddle = &self.griddle;
        let ident = &entity.ident;
        let entity_name = ident.to_string();
        let statement = sql::insert(entity);

        let binds = entity
            .insert_columns()
            .enumerate()
            .map(|(offset, column)| bind_column(column, offset + 1));

        let (return_ty, finish, doc) = match entity.primary_key() {
            Some(key) if key.auto_increment => {
                let key_ty = &key.field_ty;
                let rowid = match key.ty.scalar {
                    Scalar::I32 => quote!(self.connection.last_insert_rowid()? as i32),
                    _ => quote!(self.connection.last_insert_rowid()?),
                };

                (
                    quote!(#key_ty),
                    quote!(Ok(#rowid)),
                    "Inserts `entity` and returns the generated key.",
                )
            }
            _ => (quote!(()), quote!(Ok(())), "Inserts `entity`."),
        };

        quote! {
            #[doc = #doc]
            #vis fn insert(&self, entity: &#ident) -> #griddle::Result<#return_ty> {
                let run = || -> #griddle::Result<#return_ty> {
                    let mut stmt = self.connection.prepare(#statement)?;
                    #(#binds)*
                    stmt.execute()?;
                    #finish
                };

                run().map_err(|err| #griddle::Error::entity_operation(#entity_name, "insert", err))
            }
        }
    }

    fn expand_keyed_ops(&self) -> TokenStream {
        let Some(key) = self.entity.primary_key() else {
            return quote!();
        };

        let entity = self.entity;
        let vis = &entity.vis;
        let griddle = &self.griddle;
        let ident = &entity.ident;
        let entity_name = ident.to_string();
        let key_field = &key.field;
        let key_ty = &key.field_ty;

        let update_columns: Vec<&ColumnSpec> = entity.update_columns().collect();
        let update = if update_columns.is_empty() {
            quote!()
        } else {
            let statement = sql::update(entity, key);
            let binds = update_columns
                .iter()
                .copied()
                .enumerate()
                .map(|(offset, column)| bind_column(column, offset + 1));
            let key_position = util::int(update_columns.len() + 1);
            let key_value = key
                .ty
                .scalar
                .bind_expr(quote!(entity.#key_field), BindMode::Field);

            quote! {
                #vis fn update(&self, entity: &#ident) -> #griddle::Result<()> {
                    let run = || -> #griddle::Result<()> {
                        let mut stmt = self.connection.prepare(#statement)?;
                        #(#binds)*
                        stmt.bind(#key_position, #key_value)?;
                        stmt.execute()?;
                        Ok(())
                    };

                    run().map_err(|err| {
                        #griddle::Error::entity_operation(#entity_name, "update", err)
                    })
                }
            }
        };

        let delete_statement = sql::delete(entity, key);
        let delete_key = key.ty.scalar.bind_expr(quote!(#key_field), BindMode::Owned);

        let select_statement = sql::select_by_id(entity, key);
        let select_key = key.ty.scalar.bind_expr(quote!(#key_field), BindMode::Owned);

        quote! {
            #update

            #vis fn delete(&self, #key_field: #key_ty) -> #griddle::Result<()> {
                let run = || -> #griddle::Result<()> {
                    let mut stmt = self.connection.prepare(#delete_statement)?;
                    stmt.bind(1, #delete_key)?;
                    stmt.execute()?;
                    Ok(())
                };

                run().map_err(|err| #griddle::Error::entity_operation(#entity_name, "delete", err))
            }

            #vis fn get_by_id(&self, #key_field: #key_ty) -> #griddle::Result<Option<#ident>> {
                let mut stmt = self.connection.prepare(#select_statement)?;
                stmt.bind(1, #select_key)?;
                let mut rows = stmt.query()?;

                match rows.next()? {
                    Some(row) => Ok(Some(#ident::from_row(&row)?)),
                    None => Ok(None),
                }
            }
        }
    }

    fn expand_get_all(&self) -> TokenStream {
        let vis = &self.entity.vis;
        let griddle = &self.griddle;
        let ident = &self.entity.ident;
        let statement = sql::select_all(self.entity);

        quote! {
            #vis fn get_all(&self) -> #griddle::Result<Vec<#ident>> {
                let mut stmt = self.connection.prepare(#statement)?;
                let mut rows = stmt.query()?;
                let mut entities = Vec::new();

                while let Some(row) = rows.next()? {
                    entities.push(#ident::from_row(&row)?);
                }

                Ok(entities)
            }
        }
    }

    fn expand_count(&self) -> TokenStream {
        let vis = &self.entity.vis;
        let griddle = &self.griddle;
        let count_statement = sql::count(self.entity);
        let count_where_format = format!("{count_statement} WHERE {{}}");

        quote! {
            #vis fn count(&self) -> #griddle::Result<i64> {
                self.connection.query_scalar_int(#count_statement)
            }

            /// Counts rows matching `clause`.
            ///
            /// The clause is spliced into the statement text verbatim rather
            /// than bound as a parameter, so it may be any filter expression
            /// the engine accepts; the caller owns its safety. An empty or
            /// all-whitespace clause is rejected before the connection is
            /// touched.
            #vis fn count_where(&self, clause: &str) -> #griddle::Result<i64> {
                if clause.trim().is_empty() {
                    return Err(#griddle::Error::invalid_argument(
                        "where clause must not be empty",
                    ));
                }

                self.connection.query_scalar_int(&format!(#count_where_format, clause))
            }
        }
    }

    fn expand_async_ops(&self) -> TokenStream {
        if !self.entity.async_ops {
            return quote!();
        }

        let entity = self.entity;
        let vis = &entity.vis;
        let griddle = &self.griddle;
        let ident = &entity.ident;

        let mut ops = vec![];

        if entity.create_table {
            ops.push(quote! {
                #vis async fn create_table_async(&self) -> #griddle::Result<()> {
                    self.create_table()
                }
            });
        }

        let insert_return = match entity.primary_key() {
            Some(key) if key.auto_increment => {
                let key_ty = &key.field_ty;
                quote!(#key_ty)
            }
            _ => quote!(()),
        };

        ops.push(quote! {
            /// Runs the synchronous [`insert`](Self::insert) when polled. The
            /// async counterparts are a scheduling convenience, not a
            /// concurrency guarantee.
            #vis async fn insert_async(&self, entity: &#ident) -> #griddle::Result<#insert_return> {
                self.insert(entity)
            }
        });

        if let Some(key) = entity.primary_key() {
            let key_field = &key.field;
            let key_ty = &key.field_ty;

            if entity.update_columns().next().is_some() {
                ops.push(quote! {
                    #vis async fn update_async(&self, entity: &#ident) -> #griddle::Result<()> {
                        self.update(entity)
                    }
                });
            }

            ops.push(quote! {
                #vis async fn delete_async(&self, #key_field: #key_ty) -> #griddle::Result<()> {
                    self.delete(#key_field)
                }

                #vis async fn get_by_id_async(&self, #key_field: #key_ty) -> #griddle::Result<Option<#ident>> {
                    self.get_by_id(#key_field)
                }
            });
        }

        ops.push(quote! {
            #vis async fn get_all_async(&self) -> #griddle::Result<Vec<#ident>> {
                self.get_all()
            }

            #vis async fn count_async(&self) -> #griddle::Result<i64> {
                self.count()
            }

            #vis async fn count_where_async(&self, clause: &str) -> #griddle::Result<i64> {
                self.count_where(clause)
            }
        });

        quote!(#(#ops)*)
    }
}

fn bind_column(column: &ColumnSpec, position: usize) -> TokenStream {
    let field = &column.field;
    let index = util::int(position);

    if column.ty.nullable {
        let value = column.ty.scalar.bind_expr(quote!(value), BindMode::Borrowed);

        quote! {
            match &entity.#field {
                Some(value) => stmt.bind(#index, #value)?,
                None => stmt.bind_null(#index)?,
            };
        }
    } else {
        let value = column
            .ty
            .scalar
            .bind_expr(quote!(entity.#field), BindMode::Field);

        quote!(stmt.bind(#index, #value)?;)
    }
}
