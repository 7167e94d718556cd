use proc_macro2::TokenStream;
use quote::quote;

use super::Expand;

impl Expand<'_> {
    /// Row-to-entity mapping. Every column is probed by name
    /// (case-insensitively) in schema order; a column the projection omits
    /// falls back to `None` when nullable and to the type-appropriate
    /// default otherwise.
    pub(super) fn expand_from_row(&self) -> TokenStream {
        let entity = self.entity;
        let vis = &entity.vis;
        let griddle = &self.griddle;
        let ident = &entity.ident;

        let fields = entity.columns.iter().map(|column| {
            let field = &column.field;
            let name = column.name.as_str();
            let read = column
                .ty
                .read_expr(griddle, &quote!(row), &quote!(index), name);
            let absent = column.ty.absent_expr(griddle);

            quote! {
                #field: match row.column_index(#name) {
                    Some(index) => #read,
                    None => #absent,
                }
            }
        });

        let skipped = entity
            .skipped
            .iter()
            .map(|field| quote!(#field: Default::default()));

        quote! {
            impl #ident {
                #vis fn from_row(row: &#griddle::Row<'_>) -> #griddle::Result<Self> {
                    Ok(Self {
                        #(#fields,)*
                        #(#skipped,)*
                    })
                }
            }
        }
    }
}
