mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate_entity(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let entity = schema::Entity::from_ast(&item)?;

    Ok(expand::entity(&entity))
}

pub fn generate_from_row(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let shape = schema::ResultShape::from_ast(&item)?;

    Ok(expand::result_shape(&shape))
}
