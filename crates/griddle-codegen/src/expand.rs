mod mapping;
mod query;
mod repository;
mod row;
mod sql;
mod util;

use crate::schema::{Entity, ResultShape};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for griddle types
    griddle: TokenStream,
}

struct ExpandShape<'a> {
    /// The query-result shape being expanded
    shape: &'a ResultShape,

    /// Path prefix for griddle types
    griddle: TokenStream,
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    let expand = Expand {
        entity,
        griddle: quote!(::griddle),
    };

    let from_row = expand.expand_from_row();
    let repository = expand.expand_repository();

    quote! {
        #from_row
        #repository
    }
}

pub(super) fn result_shape(shape: &ResultShape) -> TokenStream {
    let expand = ExpandShape {
        shape,
        griddle: quote!(::griddle),
    };

    let from_row = expand.expand_from_row();
    let extensions = expand.expand_row_extensions();
    let query_helpers = expand.expand_query_helpers();

    quote! {
        #from_row
        #extensions
        #query_helpers
    }
}
