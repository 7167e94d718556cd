use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::ExpandShape;

impl ExpandShape<'_> {
    /// Free query helpers. Each prepares the statement, maps through
    /// `from_row`, and drops the statement and its rows before returning on
    /// every path, so no handle outlives the call.
    pub(super) fn expand_query_helpers(&self) -> TokenStream {
        if !self.shape.query_helpers {
            return quote!();
        }

        let shape = self.shape;
        let vis = &shape.vis;
        let griddle = &self.griddle;
        let ident = &shape.ident;
        let query = format_ident!("query_{}", shape.snake);
        let query_first = format_ident!("query_first_{}", shape.snake);
        let query_first_or_default = format_ident!("query_first_or_default_{}", shape.snake);

        let query_doc = format!("Runs `sql` and maps every result row onto [`{ident}`].");
        let first_doc = format!(
            "Runs `sql` and maps the first result row onto [`{ident}`]; zero rows is an error."
        );
        let first_or_default_doc = format!(
            "Runs `sql` and maps the first result row onto [`{ident}`], or `None` for zero rows."
        );

        quote! {
            #[doc = #query_doc]
            #vis fn #query(
                connection: &#griddle::Connection,
                sql: &str,
            ) -> #griddle::Result<Vec<#ident>> {
                let mut stmt = connection.prepare(sql)?;
                let mut rows = stmt.query()?;
                let mut results = Vec::new();

                while let Some(row) = rows.next()? {
                    results.push(#ident::from_row(&row)?);
                }

                Ok(results)
            }

            #[doc = #first_doc]
            #vis fn #query_first(
                connection: &#griddle::Connection,
                sql: &str,
            ) -> #griddle::Result<#ident> {
                let mut stmt = connection.prepare(sql)?;
                let mut rows = stmt.query()?;

                match rows.next()? {
                    Some(row) => #ident::from_row(&row),
                    None => Err(#griddle::Error::RecordNotFound),
                }
            }

            #[doc = #first_or_default_doc]
            #vis fn #query_first_or_default(
                connection: &#griddle::Connection,
                sql: &str,
            ) -> #griddle::Result<Option<#ident>> {
                let mut stmt = connection.prepare(sql)?;
                let mut rows = stmt.query()?;

                match rows.next()? {
                    Some(row) => Ok(Some(#ident::from_row(&row)?)),
                    None => Ok(None),
                }
            }
        }
    }
}
