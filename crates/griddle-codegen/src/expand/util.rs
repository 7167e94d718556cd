use proc_macro2::Literal;
use quote::format_ident;

use crate::schema::{Entity, ResultShape};

pub(super) fn int(value: usize) -> Literal {
    Literal::usize_unsuffixed(value)
}

pub(super) fn repository_ident(entity: &Entity) -> syn::Ident {
    format_ident!("{}Repository", entity.ident)
}

pub(super) fn row_ext_ident(shape: &ResultShape) -> syn::Ident {
    format_ident!("{}RowExt", shape.ident)
}

pub(super) fn rows_ext_ident(shape: &ResultShape) -> syn::Ident {
    format_ident!("{}RowsExt", shape.ident)
}
