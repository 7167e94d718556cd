use super::{EntityColumnAttr, ErrorSet, KeyAttr};

/// One named entity field and its recognized attributes.
#[derive(Debug)]
pub(crate) struct Field {
    pub(crate) ident: syn::Ident,
    pub(crate) ty: syn::Type,
    pub(crate) key: Option<KeyAttr>,
    pub(crate) column: Option<EntityColumnAttr>,
    /// `#[skip]`: the field never appears in the schema.
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut key = None;
        let mut column = None;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    match KeyAttr::from_ast(attr) {
                        Ok(parsed) => key = Some(parsed),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match EntityColumnAttr::from_ast(attr) {
                        Ok(parsed) => column = Some(parsed),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("skip") {
                if skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    skip = true;
                }
            }
        }

        if skip && (key.is_some() || column.is_some()) {
            errs.push(syn::Error::new_spanned(
                field,
                "#[skip] cannot be combined with #[key] or #[column]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            key,
            column,
            skip,
        })
    }
}
