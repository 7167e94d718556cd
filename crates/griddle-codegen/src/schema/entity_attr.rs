use super::ErrorSet;

/// Struct-level `#[entity(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    pub(crate) table: Option<syn::LitStr>,
    repository: Option<bool>,
    create_table: Option<bool>,
    async_ops: Option<bool>,
}

impl EntityAttr {
    pub(crate) fn repository(&self) -> bool {
        self.repository.unwrap_or(true)
    }

    pub(crate) fn create_table(&self) -> bool {
        self.create_table.unwrap_or(true)
    }

    pub(crate) fn async_ops(&self) -> bool {
        self.async_ops.unwrap_or(true)
    }

    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            let result = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    if self.table.is_some() {
                        return Err(meta.error("duplicate `table` option"));
                    }
                    self.table = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("repository") {
                    if self.repository.is_some() {
                        return Err(meta.error("duplicate `repository` option"));
                    }
                    self.repository = Some(parse_bool(&meta)?);
                } else if meta.path.is_ident("create_table") {
                    if self.create_table.is_some() {
                        return Err(meta.error("duplicate `create_table` option"));
                    }
                    self.create_table = Some(parse_bool(&meta)?);
                } else if meta.path.is_ident("async_ops") {
                    if self.async_ops.is_some() {
                        return Err(meta.error("duplicate `async_ops` option"));
                    }
                    self.async_ops = Some(parse_bool(&meta)?);
                } else {
                    return Err(meta.error(
                        "expected `table`, `repository`, `create_table`, or `async_ops`",
                    ));
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

pub(super) fn parse_bool(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<bool> {
    let lit: syn::LitBool = meta.value()?.parse()?;
    Ok(lit.value())
}
