use super::SqlType;

mod kw {
    syn::custom_keyword!(integer);
    syn::custom_keyword!(text);
    syn::custom_keyword!(real);
    syn::custom_keyword!(datetime);
    syn::custom_keyword!(skip_insert);
    syn::custom_keyword!(skip_update);
    syn::custom_keyword!(index);
    syn::custom_keyword!(optional);
    syn::custom_keyword!(with);
}

/// `#[column(...)]` options recognized on entity fields.
///
/// Allowed syntax:
///
/// #[column("name")]
/// #[column(type = integer)]
/// #[column(default = "CURRENT_TIMESTAMP")]
/// #[column("name", type = text, skip_insert, skip_update)]
#[derive(Debug, Default)]
pub(crate) struct EntityColumnAttr {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) ty: Option<SqlType>,
    pub(crate) default: Option<syn::LitStr>,
    pub(crate) skip_insert: bool,
    pub(crate) skip_update: bool,
}

impl EntityColumnAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for EntityColumnAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(syn::Token![type]) {
                if result.ty.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column type"));
                }
                let _: syn::Token![type] = input.parse()?;
                let _: syn::Token![=] = input.parse()?;
                result.ty = Some(parse_sql_type(input)?);
            } else if lookahead.peek(syn::Token![default]) {
                if result.default.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `default` option"));
                }
                let _: syn::Token![default] = input.parse()?;
                let _: syn::Token![=] = input.parse()?;
                result.default = Some(input.parse()?);
            } else if lookahead.peek(kw::skip_insert) {
                let _: kw::skip_insert = input.parse()?;
                result.skip_insert = true;
            } else if lookahead.peek(kw::skip_update) {
                let _: kw::skip_update = input.parse()?;
                result.skip_update = true;
            } else if lookahead.peek(kw::index)
                || lookahead.peek(kw::optional)
                || lookahead.peek(kw::with)
            {
                return Err(syn::Error::new(
                    input.span(),
                    "`index`, `optional`, and `with` apply to #[derive(FromRow)] fields",
                ));
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

/// `#[column(...)]` options recognized on query-result fields.
///
/// Allowed syntax:
///
/// #[column("name")]
/// #[column(index = 0)]
/// #[column(optional)]
/// #[column("name", with = path::to::converter)]
#[derive(Debug, Default)]
pub(crate) struct ResultColumnAttr {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) index: Option<syn::LitInt>,
    pub(crate) optional: bool,
    pub(crate) with: Option<syn::Path>,
}

impl ResultColumnAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for ResultColumnAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::index) {
                if result.index.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `index` option"));
                }
                let _: kw::index = input.parse()?;
                let _: syn::Token![=] = input.parse()?;
                result.index = Some(input.parse()?);
            } else if lookahead.peek(kw::optional) {
                let _: kw::optional = input.parse()?;
                result.optional = true;
            } else if lookahead.peek(kw::with) {
                if result.with.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `with` option"));
                }
                let _: kw::with = input.parse()?;
                let _: syn::Token![=] = input.parse()?;
                result.with = Some(input.parse()?);
            } else if lookahead.peek(syn::Token![type])
                || lookahead.peek(syn::Token![default])
                || lookahead.peek(kw::skip_insert)
                || lookahead.peek(kw::skip_update)
            {
                return Err(syn::Error::new(
                    input.span(),
                    "`type`, `default`, `skip_insert`, and `skip_update` apply to #[derive(Entity)] fields",
                ));
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

fn parse_sql_type(input: syn::parse::ParseStream) -> syn::Result<SqlType> {
    let lookahead = input.lookahead1();

    if lookahead.peek(kw::integer) {
        let _: kw::integer = input.parse()?;
        Ok(SqlType::Integer)
    } else if lookahead.peek(kw::text) {
        let _: kw::text = input.parse()?;
        Ok(SqlType::Text)
    } else if lookahead.peek(kw::real) {
        let _: kw::real = input.parse()?;
        Ok(SqlType::Real)
    } else if lookahead.peek(kw::datetime) {
        let _: kw::datetime = input.parse()?;
        Ok(SqlType::DateTime)
    } else {
        Err(lookahead.error())
    }
}
