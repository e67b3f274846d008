use std::collections::{HashMap, hash_map::Entry};
use std::fmt::Display;
use std::hash::Hash;

use darling::util::SpannedValue;
use itertools::Itertools as _;
use lazy_format::lazy_format;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Expr, Field, Fields, Ident, Token, punctuated::Punctuated, spanned::Spanned as _};

use crate::common::{FieldKind, ParsedFieldInfo};

/// Tuples only implement `ArgumentList` up to this size
const MAX_FIELDS: usize = 12;

/// Every name used so far, and where, for reporting duplicates
struct SeenNames<T> {
    seen: HashMap<T, Span>,
}

impl<T: Hash + Eq + Copy + Display> SeenNames<T> {
    fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    fn insert(&mut self, name: SpannedValue<T>, dashes: &str) -> syn::Result<()> {
        match self.seen.entry(*name) {
            Entry::Vacant(entry) => {
                entry.insert(name.span());
                Ok(())
            }
            Entry::Occupied(first) => {
                let mut err = syn::Error::new(
                    name.span(),
                    lazy_format!("duplicate option {dashes}{name}", name = *name),
                );
                err.combine(syn::Error::new(*first.get(), "first used here"));
                Err(err)
            }
        }
    }
}

pub fn derive_declare_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;

    if let Some(param) = input.generics.params.first() {
        return Err(syn::Error::new(
            param.span(),
            "generic types aren't supported by `Declare`",
        ));
    }

    match input.data {
        syn::Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => derive_declare_struct(&input.ident, &fields.named),
            Fields::Unnamed(ref fields) => Err(syn::Error::new(
                fields.span(),
                "can't derive `Declare` on a tuple struct; options need names",
            )),
            Fields::Unit => derive_declare_struct(&input.ident, &Punctuated::new()),
        },
        syn::Data::Enum(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Declare` on an enum",
        )),
        syn::Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Declare` on a union",
        )),
    }
}

fn derive_declare_struct(
    name: &Ident,
    fields: &Punctuated<Field, Token![,]>,
) -> syn::Result<TokenStream2> {
    if fields.len() > MAX_FIELDS {
        return Err(syn::Error::new(
            fields.span(),
            lazy_format!("`Declare` supports at most {MAX_FIELDS} options"),
        ));
    }

    let fields: Vec<ParsedFieldInfo> = fields
        .iter()
        .map(ParsedFieldInfo::from_field)
        .try_collect()?;

    let mut long_names = SeenNames::new();
    let mut short_names = SeenNames::new();

    for field in &fields {
        long_names.insert(SpannedValue::new(field.long.as_str(), field.long.span()), "--")?;

        if let Some(short) = field.short {
            short_names.insert(short, "-")?;
        }
    }

    let descriptor_types = fields.iter().map(|field| {
        let ty = field.ty;

        match field.kind {
            FieldKind::Flag => quote! { ::argtuple::FlagOption },
            FieldKind::Value { .. } => quote! { ::argtuple::ValueOption<#ty> },
        }
    });

    let descriptors = fields.iter().map(|field| {
        let ty = field.ty;
        let long = field.long.as_str();
        let short = field.short.map(|short| {
            let short = *short;
            quote! { .with_short(#short) }
        });
        let docs = field.docs.as_str();

        match field.kind {
            FieldKind::Flag => quote! {
                ::argtuple::FlagOption::new(#long)
                    #short
                    .with_help(#docs)
            },
            FieldKind::Value {
                ref placeholder,
                ref default,
            } => {
                let placeholder = placeholder.as_str();
                let default = default.as_ref().map(|default| {
                    let default = default_expr(ty, default);
                    quote! { .default_value(#default) }
                });

                quote! {
                    ::argtuple::ValueOption::<#ty>::new(#long)
                        #short
                        .with_help(#docs)
                        .with_placeholder(#placeholder)
                        #default
                }
            }
        }
    });

    let idents: Vec<_> = fields.iter().map(|field| &field.ident).collect();

    Ok(quote! {
        impl ::argtuple::Declare for #name {
            type Arguments = (#(#descriptor_types,)*);

            fn declare() -> Self::Arguments {
                (#(#descriptors,)*)
            }

            fn from_values(
                (#(#idents,)*): <Self::Arguments as ::argtuple::ArgumentList>::Values,
            ) -> Self {
                Self {
                    #(#idents,)*
                }
            }
        }
    })
}

/// String literal defaults are converted to the field type
fn default_expr(ty: &syn::Type, default: &Expr) -> TokenStream2 {
    match default {
        Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(_),
            ..
        }) => quote! {
            <#ty as ::core::convert::From<&str>>::from(#default)
        },
        _ => quote! { #default },
    }
}
