//! Procedural macros for entity_naming
//!
//! This crate provides the `Entity` derive macro, which describes a struct's
//! name and fields to the entity_naming library.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro implementing `entity_naming::Entity`.
///
/// Container attributes: `#[entity(table = "...")]` sets an explicit table
/// name, `#[entity(style = "...")]` picks a style by name. Field attributes:
/// `#[entity(name = "...")]` renames the field, `#[entity(skip)]` leaves it out.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_entity(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Arguments of the container-level `#[entity(...)]` attribute
#[derive(Default)]
struct EntityArgs {
    table: Option<String>,
    style: Option<String>,
}

/// Arguments of a field-level `#[entity(...)]` attribute
#[derive(Default)]
struct FieldArgs {
    name: Option<String>,
    skip: bool,
}

fn parse_entity_args(attrs: &[Attribute]) -> syn::Result<EntityArgs> {
    let mut args = EntityArgs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("entity")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let value: LitStr = meta.value()?.parse()?;
                args.table = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("style") {
                let value: LitStr = meta.value()?.parse()?;
                args.style = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `table` or `style`"))
            }
        })?;
    }

    Ok(args)
}

fn parse_field_args(attrs: &[Attribute]) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("entity")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                args.name = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                args.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `name` or `skip`"))
            }
        })?;
    }

    Ok(args)
}

fn expand_entity(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Entity can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Entity can only be derived for structs",
            ))
        }
    };

    let args = parse_entity_args(&input.attrs)?;
    let entity_name = name.unraw().to_string();

    let mut field_names = Vec::new();
    for field in fields {
        let field_args = parse_field_args(&field.attrs)?;
        if field_args.skip {
            continue;
        }
        let field_name = match field_args.name {
            Some(renamed) => renamed,
            None => match &field.ident {
                Some(ident) => ident.unraw().to_string(),
                None => continue,
            },
        };
        field_names.push(field_name);
    }

    let table = args.table.map(|table| quote! { class = class.table(#table); });
    let style = args.style.map(|style| quote! { class = class.style(#style); });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::entity_naming::entity::Entity for #name #ty_generics #where_clause {
            fn entity_class() -> ::entity_naming::entity::EntityClass {
                #[allow(unused_mut)]
                let mut class = ::entity_naming::entity::EntityClass::new(#entity_name);
                #( class = class.field(#field_names); )*
                #table
                #style
                class
            }
        }
    })
}
