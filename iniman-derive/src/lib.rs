//! Derive macros for iniman section bindings
//!
//! This crate provides `#[derive(IniSection)]` for records bound to an INI
//! section and `#[derive(IniEnum)]` for unit enums stored by variant name.
//!
//! # Usage
//!
//! ```text
//! use iniman::{IniEnum, IniSection};
//!
//! #[derive(Default, IniEnum)]
//! enum Mode { #[default] Windowed, Fullscreen }
//!
//! #[derive(Default, IniSection)]
//! #[ini(section = "Display")]
//! struct Display {
//!     #[ini(key = "Width")]
//!     width: u32,
//!
//!     #[ini(key = "Mode")]
//!     mode: Mode,
//!
//!     // not bound: neither read nor written
//!     scratch: String,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, Type, parse_macro_input};

/// Derive macro for generating `IniSection` implementations.
///
/// # Attributes
///
/// ## Container attributes (`#[ini(...)]`)
/// - `section = "Name"` - Section the record is stored under. Without it the
///   type compiles but every read or write fails with `UnboundType`.
///
/// ## Field attributes (`#[ini(...)]`)
/// - `key = "Key"` - INI key (defaults to the field name)
/// - `read_only` - Written, but never assigned on read (field must be `Clone`)
/// - `write_only` - Assigned on read, but never written
///
/// Fields without an `#[ini]` attribute are ignored.
#[proc_macro_derive(IniSection, attributes(ini))]
pub fn derive_ini_section(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let container_attrs = match parse_container_attrs(&input.attrs) {
        Ok(attrs) => attrs,
        Err(e) => return e.to_compile_error().into(),
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "IniSection can only be derived for structs with named fields.\n\nExample:\n  #[derive(IniSection)]\n  #[ini(section = \"Name\")]\n  struct MySettings {\n      #[ini(key = \"Key\")]\n      field: Type,\n  }",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(
                &input,
                "IniSection can only be derived for structs.\n\nTry: #[derive(IniEnum)] for enums stored as a single value.",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut bindings = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;

        let attrs = match parse_field_attrs(&field.attrs) {
            Ok(Some(attrs)) => attrs,
            // no #[ini] attribute: not bound
            Ok(None) => continue,
            Err(e) => return e.to_compile_error().into(),
        };

        if attrs.read_only && attrs.write_only {
            return syn::Error::new_spanned(
                field,
                "#[ini(read_only)] and #[ini(write_only)] cannot be combined",
            )
            .to_compile_error()
            .into();
        }

        bindings.push(generate_field_binding(ident, field_type, attrs));
    }

    let base = match &container_attrs.section {
        Some(section) => quote! { iniman::Binding::new(#section) },
        None => quote! { iniman::Binding::unbound() },
    };

    let expanded = quote! {
        impl #impl_generics iniman::IniSection for #name #ty_generics #where_clause {
            fn binding() -> iniman::Binding<Self> {
                #base #(#bindings)*
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for unit enums stored by variant name.
///
/// Generates both `IniEnum` and `IniValue`. Matching is exact and
/// case-sensitive against the variant identifiers.
#[proc_macro_derive(IniEnum)]
pub fn derive_ini_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input, "IniEnum can only be derived for enums")
            .to_compile_error()
            .into();
    };

    if data.variants.is_empty() {
        return syn::Error::new_spanned(&input, "IniEnum needs at least one variant")
            .to_compile_error()
            .into();
    }

    let mut idents = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "IniEnum variants cannot carry data; only unit variants are supported",
            )
            .to_compile_error()
            .into();
        }
        idents.push(&variant.ident);
    }

    let names: Vec<String> = idents.iter().map(|i| i.to_string()).collect();
    let indices: Vec<usize> = (0..idents.len()).collect();

    let expanded = quote! {
        impl iniman::IniEnum for #name {
            const VARIANTS: &'static [&'static str] = &[#(#names),*];

            fn variant_name(&self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            fn from_variant_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #(#indices => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl iniman::IniValue for #name {
            fn kind() -> iniman::ValueKind {
                iniman::ValueKind::Enum(<Self as iniman::IniEnum>::VARIANTS)
            }

            fn to_ini(&self) -> ::std::string::String {
                iniman::enum_to_ini(self)
            }

            fn from_ini(raw: &str) -> ::core::result::Result<Self, iniman::CoercionError> {
                iniman::enum_from_ini(raw)
            }
        }
    };

    TokenStream::from(expanded)
}

/// Generate the `Binding` builder call for one annotated field
fn generate_field_binding(
    ident: &syn::Ident,
    field_type: &Type,
    attrs: FieldAttrs,
) -> proc_macro2::TokenStream {
    let member = ident.to_string();
    let key = attrs.key.unwrap_or_else(|| member.clone());

    if attrs.read_only {
        quote! {
            .read_only(#key, #member, |record: &Self| ::core::clone::Clone::clone(&record.#ident))
        }
    } else if attrs.write_only {
        quote! {
            .write_only(#key, #member, |record: &mut Self, value: #field_type| record.#ident = value)
        }
    } else {
        quote! {
            .field(#key, #member, |record: &Self| &record.#ident, |record: &mut Self| &mut record.#ident)
        }
    }
}

/// Container-level attributes from #[ini(...)]
#[derive(Default)]
struct ContainerAttrs {
    section: Option<String>,
}

/// Field-level attributes from #[ini(...)]
#[derive(Default)]
struct FieldAttrs {
    key: Option<String>,
    read_only: bool,
    write_only: bool,
}

fn string_value(expr: &Expr, attr: &str) -> syn::Result<String> {
    if let Expr::Lit(lit) = expr {
        if let Lit::Str(s) = &lit.lit {
            return Ok(s.value());
        }
    }
    Err(syn::Error::new_spanned(
        expr,
        format!("#[ini({attr})] must be a string literal.\n\nExample: #[ini({attr} = \"Name\")]"),
    ))
}

fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut result = ContainerAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("ini") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in nested {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("section") => {
                    result.section = Some(string_value(&nv.value, "section")?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown container attribute; expected #[ini(section = \"Name\")]",
                    ));
                }
            }
        }
    }

    Ok(result)
}

/// `Ok(None)` when the field carries no `#[ini]` attribute
fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<Option<FieldAttrs>> {
    let mut result: Option<FieldAttrs> = None;

    for attr in attrs {
        if !attr.path().is_ident("ini") {
            continue;
        }
        let parsed = result.get_or_insert_with(FieldAttrs::default);

        // bare #[ini]
        if matches!(attr.meta, Meta::Path(_)) {
            continue;
        }

        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in nested {
            match meta {
                Meta::Path(path) if path.is_ident("read_only") => parsed.read_only = true,
                Meta::Path(path) if path.is_ident("write_only") => parsed.write_only = true,
                Meta::NameValue(nv) if nv.path.is_ident("key") => {
                    parsed.key = Some(string_value(&nv.value, "key")?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown field attribute; expected key = \"...\", read_only or write_only",
                    ));
                }
            }
        }
    }

    Ok(result)
}
