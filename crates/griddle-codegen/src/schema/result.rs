use super::{column_name, ColumnTy, ErrorSet, ResultColumnAttr, RowAttr};

/// Extracted description of a flat query projection.
///
/// Unlike an entity there is no table and no key; the shape only describes
/// how each property is read out of a live result row.
#[derive(Debug)]
pub(crate) struct ResultShape {
    pub(crate) ident: syn::Ident,
    pub(crate) vis: syn::Visibility,
    /// Snake-cased type name used in generated method and function names.
    pub(crate) snake: String,
    pub(crate) properties: Vec<ResultProperty>,
    pub(crate) extensions: bool,
    pub(crate) query_helpers: bool,
}

#[derive(Debug)]
pub(crate) struct ResultProperty {
    pub(crate) field: syn::Ident,
    pub(crate) column: String,
    pub(crate) ty: ColumnTy,
    /// The column may be absent from the projection entirely; it is probed
    /// before access and defaulted when missing.
    pub(crate) optional: bool,
    /// Fixed-ordinal access instead of name lookup.
    pub(crate) index: Option<usize>,
    /// User-supplied conversion replacing the built-in read.
    pub(crate) converter: Option<syn::Path>,
}

impl ResultShape {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(fields) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "query-result fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "query-result generics are not supported",
            ));
        }

        let mut attr = RowAttr::default();
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let mut properties = vec![];

        for node in fields.named.iter() {
            let ident = node.ident.clone().expect("named fields have identifiers");

            let mut column: Option<ResultColumnAttr> = None;

            for a in &node.attrs {
                if a.path().is_ident("column") {
                    if column.is_some() {
                        errs.push(syn::Error::new_spanned(a, "duplicate #[column] attribute"));
                    } else {
                        match ResultColumnAttr::from_ast(a) {
                            Ok(parsed) => column = Some(parsed),
                            Err(err) => errs.push(err),
                        }
                    }
                }
            }

            let column = column.unwrap_or_default();

            if column.optional {
                if let Some(index) = &column.index {
                    errs.push(syn::Error::new(
                        index.span(),
                        "`optional` columns are probed by name and cannot use `index`",
                    ));
                }
            }

            let index = match &column.index {
                Some(lit) => match lit.base10_parse::<usize>() {
                    Ok(value) => Some(value),
                    Err(err) => {
                        errs.push(err);
                        None
                    }
                },
                None => None,
            };

            properties.push(ResultProperty {
                column: column
                    .name
                    .as_ref()
                    .map(|lit| lit.value())
                    .unwrap_or_else(|| column_name(&ident.to_string())),
                field: ident,
                ty: ColumnTy::from_type(&node.ty),
                optional: column.optional,
                index,
                converter: column.with,
            });
        }

        if properties.is_empty() {
            errs.push(syn::Error::new_spanned(
                ast,
                "query-result shape must have at least one field",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            snake: column_name(&ast.ident.to_string()),
            ident: ast.ident.clone(),
            vis: ast.vis.clone(),
            properties,
            extensions: attr.extensions(),
            query_helpers: attr.query_helpers(),
        })
    }
}
