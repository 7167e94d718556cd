use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{util, ExpandShape};

impl ExpandShape<'_> {
    /// Map-one. Each property uses one of three access strategies, fixed at
    /// generation time: probe-then-default for `optional` columns, a fixed
    /// ordinal when `index` was declared, or name lookup (where absence is
    /// an error). A declared converter replaces the built-in read; combined
    /// with `optional`, the probe still runs first.
    pub(super) fn expand_from_row(&self) -> TokenStream {
        let shape = self.shape;
        let vis = &shape.vis;
        let griddle = &self.griddle;
        let ident = &shape.ident;

        let fields = shape.properties.iter().map(|property| {
            let field = &property.field;
            let name = property.column.as_str();
            let absent = property.ty.absent_expr(griddle);

            if let Some(converter) = &property.converter {
                return if property.optional {
                    quote! {
                        #field: match row.column_index(#name) {
                            Some(_) => #converter(row)?,
                            None => #absent,
                        }
                    }
                } else {
                    quote!(#field: #converter(row)?)
                };
            }

            if let Some(index) = property.index {
                let index = util::int(index);
                let read = property
                    .ty
                    .read_expr(griddle, &quote!(row), &quote!(#index), name);
                return quote!(#field: #read);
            }

            let read = property
                .ty
                .read_expr(griddle, &quote!(row), &quote!(index), name);

            if property.optional {
                quote! {
                    #field: match row.column_index(#name) {
                        Some(index) => #read,
                        None => #absent,
                    }
                }
            } else {
                quote! {
                    #field: {
                        let index = row.require_column(#name)?;
                        #read
                    }
                }
            }
        });

        quote! {
            impl #ident {
                #vis fn from_row(row: &#griddle::Row<'_>) -> #griddle::Result<Self> {
                    Ok(Self {
                        #(#fields,)*
                    })
                }
            }
        }
    }

    pub(super) fn expand_row_extensions(&self) -> TokenStream {
        if !self.shape.extensions {
            return quote!();
        }

        let shape = self.shape;
        let vis = &shape.vis;
        let griddle = &self.griddle;
        let ident = &shape.ident;
        let row_ext = util::row_ext_ident(shape);
        let rows_ext = util::rows_ext_ident(shape);
        let to = format_ident!("to_{}", shape.snake);
        let try_to = format_ident!("try_to_{}", shape.snake);
        let to_list = format_ident!("to_{}_list", shape.snake);

        let to_doc = format!("Maps this row onto [`{ident}`].");
        let try_doc = "Recoverable variant: a mapping failure becomes `None` instead of an error.";
        let list_doc = format!("Maps every remaining row onto [`{ident}`], preserving row order.");

        quote! {
            #vis trait #row_ext {
                #[doc = #to_doc]
                fn #to(&self) -> #griddle::Result<#ident>;

                #[doc = #try_doc]
                fn #try_to(&self) -> Option<#ident>;
            }

            impl #row_ext for #griddle::Row<'_> {
                fn #to(&self) -> #griddle::Result<#ident> {
                    #ident::from_row(self)
                }

                fn #try_to(&self) -> Option<#ident> {
                    #ident::from_row(self).ok()
                }
            }

            #vis trait #rows_ext {
                #[doc = #list_doc]
                fn #to_list(&mut self) -> #griddle::Result<Vec<#ident>>;
            }

            impl #rows_ext for #griddle::Rows<'_> {
                fn #to_list(&mut self) -> #griddle::Result<Vec<#ident>> {
                    let mut results = Vec::new();

                    while let Some(row) = self.next()? {
                        results.push(#ident::from_row(&row)?);
                    }

                    Ok(results)
                }
            }
        }
    }
}
