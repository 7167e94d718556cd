use super::entity_attr::parse_bool;
use super::ErrorSet;

/// Struct-level `#[row(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct RowAttr {
    extensions: Option<bool>,
    query_helpers: Option<bool>,
}

impl RowAttr {
    pub(crate) fn extensions(&self) -> bool {
        self.extensions.unwrap_or(true)
    }

    pub(crate) fn query_helpers(&self) -> bool {
        self.query_helpers.unwrap_or(true)
    }

    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("row") {
                continue;
            }

            let result = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("extensions") {
                    if self.extensions.is_some() {
                        return Err(meta.error("duplicate `extensions` option"));
                    }
                    self.extensions = Some(parse_bool(&meta)?);
                } else if meta.path.is_ident("query_helpers") {
                    if self.query_helpers.is_some() {
                        return Err(meta.error("duplicate `query_helpers` option"));
                    }
                    self.query_helpers = Some(parse_bool(&meta)?);
                } else {
                    return Err(meta.error("expected `extensions` or `query_helpers`"));
                }

                Ok(())
            });

            if let Err(err) = result {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
