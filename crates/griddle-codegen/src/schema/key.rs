use syn::spanned::Spanned;

/// `#[key]` primary-key marker.
///
/// `auto` defaults to true; `#[key(auto = false)]` declares a
/// caller-supplied key that must be bound on insert.
#[derive(Debug)]
pub(crate) struct KeyAttr {
    pub(crate) auto: bool,
    pub(crate) span: proc_macro2::Span,
}

impl KeyAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        let mut auto = true;

        if !matches!(attr.meta, syn::Meta::Path(_)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("auto") {
                    let value = meta.value()?;
                    let lit: syn::LitBool = value.parse()?;
                    auto = lit.value();
                    Ok(())
                } else {
                    Err(meta.error("expected `auto`"))
                }
            })?;
        }

        Ok(Self {
            auto,
            span: attr.span(),
        })
    }
}
