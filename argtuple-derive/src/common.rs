use darling::{
    FromAttributes as _,
    util::{Override, SpannedValue},
};
use heck::{ToKebabCase as _, ToShoutySnakeCase as _};
use itertools::Itertools as _;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::ToTokens;
use syn::{Attribute, Expr, Field, Ident, Type, ext::IdentExt as _, spanned::Spanned as _};

pub struct IdentString<'a> {
    raw: &'a Ident,
    string: String,
}

impl<'a> IdentString<'a> {
    pub fn new(ident: &'a Ident) -> Self {
        Self {
            string: ident.unraw().to_string(),
            raw: ident,
        }
    }

    pub fn as_str(&self) -> &str {
        self.string.as_str()
    }

    pub fn span(&self) -> Span {
        self.raw.span()
    }
}

impl ToTokens for IdentString<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        self.raw.to_tokens(tokens);
    }
}

#[derive(darling::FromAttributes, Debug)]
#[darling(attributes(argtuple))]
struct RawParsedAttr {
    long: Option<SpannedValue<String>>,
    short: Option<Override<SpannedValue<char>>>,
    #[darling(default, with = darling::util::parse_expr::preserve_str_literal, map = Some)]
    default: Option<Expr>,
    placeholder: Option<SpannedValue<String>>,
}

pub enum FieldKind {
    Flag,
    Value {
        placeholder: SpannedValue<String>,
        default: Option<Expr>,
    },
}

pub struct ParsedFieldInfo<'a> {
    pub ident: IdentString<'a>,
    pub ty: &'a Type,
    pub long: SpannedValue<String>,
    pub short: Option<SpannedValue<char>>,
    pub docs: String,
    pub kind: FieldKind,
}

impl<'a> ParsedFieldInfo<'a> {
    pub fn from_field(field: &'a Field) -> syn::Result<Self> {
        let parsed = RawParsedAttr::from_attributes(&field.attrs)?;
        let docs = compute_docs(&field.attrs)?;

        let ident = field
            .ident
            .as_ref()
            .map(IdentString::new)
            .ok_or_else(|| syn::Error::new(field.span(), "options must be named fields"))?;

        let long = compute_long(parsed.long, &ident)?;

        let short = parsed
            .short
            .map(|short| compute_short(short.explicit(), &ident))
            .transpose()?;

        let kind = match is_bool(&field.ty) {
            true => {
                if let Some(ref default) = parsed.default {
                    return Err(syn::Error::new(
                        default.span(),
                        "flags are always false unless given, so they can't have a default",
                    ));
                }

                if let Some(ref placeholder) = parsed.placeholder {
                    return Err(syn::Error::new(
                        placeholder.span(),
                        "flags don't take a value, so they can't have a placeholder",
                    ));
                }

                FieldKind::Flag
            }
            false => FieldKind::Value {
                placeholder: compute_placeholder(parsed.placeholder, &ident)?,
                default: parsed.default,
            },
        };

        Ok(Self {
            ident,
            ty: &field.ty,
            long,
            short,
            docs,
            kind,
        })
    }
}

fn is_bool(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident("bool"),
        _ => false,
    }
}

/// Doc comment lines, trimmed and joined into a single paragraph
pub fn compute_docs(attrs: &[Attribute]) -> syn::Result<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter_map(|attr| match attr.meta {
            syn::Meta::NameValue(ref meta) => Some(meta),
            _ => None,
        })
        .filter(|meta| meta.path.is_ident("doc"))
        .map(|meta| match meta.value {
            Expr::Lit(ref lit) => match lit.lit {
                syn::Lit::Str(ref lit) => Ok(lit.value()),
                _ => Err(syn::Error::new(meta.span(), "malformed #[doc] attribute")),
            },
            Expr::Macro(ref expr) => Err(syn::Error::new(
                expr.span(),
                "macro #[doc] attributes aren't supported",
            )),
            _ => Err(syn::Error::new(meta.span(), "malformed #[doc] attribute")),
        })
        .try_collect()?;

    Ok(lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .join(" "))
}

fn compute_long(
    long: Option<SpannedValue<String>>,
    field_name: &IdentString<'_>,
) -> syn::Result<SpannedValue<String>> {
    let long = long.unwrap_or_else(|| {
        SpannedValue::new(field_name.as_str().to_kebab_case(), field_name.span())
    });

    let problem = match long.as_str() {
        "" => Some("long names can't be empty"),
        name if name.starts_with("--") => Some("leave off the leading --; it's added automatically"),
        name if name.starts_with('-') => Some("long names can't start with '-'"),
        name if name.contains('=') => Some("long names can't contain '=', which separates the value"),
        name if name.contains(char::is_whitespace) => Some("long names can't contain whitespace"),
        _ => None,
    };

    match problem {
        Some(problem) => Err(syn::Error::new(long.span(), problem)),
        None => Ok(long),
    }
}

fn compute_short(
    short: Option<SpannedValue<char>>,
    field_name: &IdentString<'_>,
) -> syn::Result<SpannedValue<char>> {
    let short = match short {
        Some(short) => short,
        None => field_name
            .as_str()
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| SpannedValue::new(c, field_name.span()))
            .ok_or_else(|| {
                syn::Error::new(
                    field_name.span(),
                    "can't pick a short name for this field; give one explicitly",
                )
            })?,
    };

    match *short {
        '-' => Err(syn::Error::new(short.span(), "short names can't be '-'")),
        c if !c.is_ascii_graphic() => Err(syn::Error::new(
            short.span(),
            "short names must be printable ascii",
        )),
        _ => Ok(short),
    }
}

fn compute_placeholder(
    placeholder: Option<SpannedValue<String>>,
    field_name: &IdentString<'_>,
) -> syn::Result<SpannedValue<String>> {
    match placeholder {
        None => Ok(SpannedValue::new(
            field_name.as_str().to_shouty_snake_case(),
            field_name.span(),
        )),
        Some(placeholder) if placeholder.contains(char::is_whitespace) => Err(syn::Error::new(
            placeholder.span(),
            "placeholders can't contain whitespace",
        )),
        Some(placeholder) => Ok(placeholder),
    }
}
