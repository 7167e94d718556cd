use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// One of the engine's declared column storage classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SqlType {
    Integer,
    Text,
    Real,
    DateTime,
}

impl SqlType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Text => "TEXT",
            SqlType::Real => "REAL",
            SqlType::DateTime => "DATETIME",
        }
    }
}

/// Semantic value categories the generator recognizes.
///
/// Detection is purely syntactic, from the final path segment of the field
/// type. Anything unrecognized becomes `Opaque` and round-trips through its
/// `Display` and `FromStr` impls as TEXT, so generation itself never fails
/// over a field type; a type missing those impls fails at the use site.
#[derive(Debug, Clone)]
pub(crate) enum Scalar {
    I32,
    I64,
    F32,
    F64,
    Bool,
    Text,
    DateTime,
    Uuid,
    Blob,
    Opaque(Box<syn::Type>),
}

/// How a bound value reaches `Statement::bind` in generated code.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BindMode {
    /// The value is an owned local, e.g. a key parameter.
    Owned,
    /// The value is a field reached through a borrowed entity.
    Field,
    /// The value is a `&T` produced by matching on an `Option` field.
    Borrowed,
}

impl Scalar {
    fn from_type(ty: &syn::Type) -> Self {
        let syn::Type::Path(path) = ty else {
            return Scalar::Opaque(Box::new(ty.clone()));
        };

        let Some(segment) = path.path.segments.last() else {
            return Scalar::Opaque(Box::new(ty.clone()));
        };

        if segment.ident == "Vec" {
            if let Some(syn::Type::Path(inner)) = generic_argument(segment) {
                if inner.path.is_ident("u8") {
                    return Scalar::Blob;
                }
            }
            return Scalar::Opaque(Box::new(ty.clone()));
        }

        match segment.ident.to_string().as_str() {
            "i32" => Scalar::I32,
            "i64" => Scalar::I64,
            "f32" => Scalar::F32,
            "f64" => Scalar::F64,
            "bool" => Scalar::Bool,
            "String" => Scalar::Text,
            "NaiveDateTime" => Scalar::DateTime,
            "Uuid" => Scalar::Uuid,
            _ => Scalar::Opaque(Box::new(ty.clone())),
        }
    }

    /// Storage affinity for the column declaration. Total over all scalars,
    /// with TEXT as the fallback for everything the engine has no closer
    /// storage class for.
    pub(crate) fn sql_type(&self) -> SqlType {
        match self {
            Scalar::I32 | Scalar::I64 | Scalar::Bool => SqlType::Integer,
            Scalar::F32 | Scalar::F64 => SqlType::Real,
            Scalar::DateTime => SqlType::DateTime,
            Scalar::Text | Scalar::Uuid | Scalar::Blob | Scalar::Opaque(_) => SqlType::Text,
        }
    }

    pub(crate) fn is_integer(&self) -> bool {
        matches!(self, Scalar::I32 | Scalar::I64)
    }

    fn is_copy(&self) -> bool {
        matches!(
            self,
            Scalar::I32
                | Scalar::I64
                | Scalar::F32
                | Scalar::F64
                | Scalar::Bool
                | Scalar::DateTime
                | Scalar::Uuid
        )
    }

    fn read_method(&self, nullable: bool) -> Option<syn::Ident> {
        let name = match self {
            Scalar::I32 => "i32",
            Scalar::I64 => "i64",
            Scalar::F32 => "f32",
            Scalar::F64 => "f64",
            Scalar::Bool => "bool",
            Scalar::Text => "text",
            Scalar::DateTime => "datetime",
            Scalar::Uuid => "uuid",
            Scalar::Blob => "blob",
            Scalar::Opaque(_) => return None,
        };

        Some(if nullable {
            format_ident!("get_opt_{name}")
        } else {
            format_ident!("get_{name}")
        })
    }

    /// Expression converting `source` into a value accepted by
    /// `Statement::bind`.
    pub(crate) fn bind_expr(&self, source: TokenStream, mode: BindMode) -> TokenStream {
        if let Scalar::Opaque(_) = self {
            return quote!(#source.to_string());
        }

        match mode {
            BindMode::Owned => source,
            BindMode::Field if self.is_copy() => source,
            BindMode::Borrowed if self.is_copy() => quote!(*#source),
            BindMode::Field | BindMode::Borrowed => quote!(#source.clone()),
        }
    }
}

/// A field's scalar category plus nullability.
#[derive(Debug, Clone)]
pub(crate) struct ColumnTy {
    pub(crate) scalar: Scalar,
    pub(crate) nullable: bool,
}

impl ColumnTy {
    pub(crate) fn from_type(ty: &syn::Type) -> Self {
        match option_inner(ty) {
            Some(inner) => ColumnTy {
                scalar: Scalar::from_type(inner),
                nullable: true,
            },
            None => ColumnTy {
                scalar: Scalar::from_type(ty),
                nullable: false,
            },
        }
    }

    /// Expression reading this column from `row` at `index`.
    pub(crate) fn read_expr(
        &self,
        griddle: &TokenStream,
        row: &TokenStream,
        index: &TokenStream,
        column: &str,
    ) -> TokenStream {
        if let Scalar::Opaque(ty) = &self.scalar {
            let parse = quote! {
                text.parse::<#ty>()
                    .map_err(|_| #griddle::Error::type_conversion(#column, stringify!(#ty)))?
            };

            return if self.nullable {
                quote! {
                    match #row.get_opt_text(#index)? {
                        Some(text) => Some(#parse),
                        None => None,
                    }
                }
            } else {
                quote! {
                    {
                        let text = #row.get_text(#index)?;
                        #parse
                    }
                }
            };
        }

        let method = self
            .scalar
            .read_method(self.nullable)
            .expect("built-in scalars have a read method");

        quote!(#row.#method(#index)?)
    }

    /// Value assigned when the column is absent from the row.
    pub(crate) fn absent_expr(&self, griddle: &TokenStream) -> TokenStream {
        if self.nullable {
            return quote!(None);
        }

        match &self.scalar {
            Scalar::I32 | Scalar::I64 => quote!(0),
            Scalar::F32 | Scalar::F64 => quote!(0.0),
            Scalar::Bool => quote!(false),
            Scalar::Text => quote!(String::new()),
            Scalar::DateTime => quote!(#griddle::chrono::NaiveDateTime::MIN),
            Scalar::Uuid => quote!(#griddle::uuid::Uuid::nil()),
            Scalar::Blob => quote!(Vec::new()),
            Scalar::Opaque(_) => quote!(Default::default()),
        }
    }
}

fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    generic_argument(segment)
}

fn generic_argument(segment: &syn::PathSegment) -> Option<&syn::Type> {
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        syn::GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}
