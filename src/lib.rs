//! Procedural macros for rat-router.
//!
//! This crate provides `#[derive(Route)]`, which wires a plain struct into the
//! router: it implements `rat_router::Route` and `rat_router::RouteKind` with the
//! route and view names computed at compile time.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr};

/// Derive macro for implementing the `Route` and `RouteKind` traits.
///
/// # Usage
///
/// ```ignore
/// #[derive(Route)]
/// struct SettingsViewModel {
///     #[route(host)]
///     host: WeakHost,
/// }
/// ```
///
/// The macro generates:
/// - `impl RouteKind` with `KIND = "SettingsViewModel"` and `VIEW = "SettingsView"`.
/// - `impl Route` returning those names and upgrading the `#[route(host)]` field.
///
/// Both names can be overridden on the struct:
///
/// ```ignore
/// #[derive(Route)]
/// #[route(name = "settings", view = "PreferencesView")]
/// struct SettingsViewModel { #[route(host)] host: WeakHost }
/// ```
#[proc_macro_derive(Route, attributes(route))]
pub fn derive_route(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand_route(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand_route(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut kind: Option<LitStr> = None;
    let mut view: Option<LitStr> = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("route")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                kind = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("view") {
                view = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `view = \"...\"`"))
            }
        })?;
    }

    let type_name = struct_name.to_string();
    let kind = kind.unwrap_or_else(|| LitStr::new(&type_name, Span::call_site()));
    let view = view.unwrap_or_else(|| LitStr::new(&view_name_for(&type_name), Span::call_site()));
    let host = host_field(input)?;

    Ok(quote! {
        impl #impl_generics ::rat_router::RouteKind for #struct_name #ty_generics #where_clause {
            const KIND: &'static str = #kind;
            const VIEW: &'static str = #view;
        }

        impl #impl_generics ::rat_router::Route for #struct_name #ty_generics #where_clause {
            fn route_name(&self) -> &str {
                <Self as ::rat_router::RouteKind>::KIND
            }

            fn router_host(&self) -> ::std::option::Option<::std::rc::Rc<dyn ::rat_router::RouterHost>> {
                self.#host.upgrade()
            }

            fn view_name(&self) -> ::std::option::Option<&str> {
                ::std::option::Option::Some(<Self as ::rat_router::RouteKind>::VIEW)
            }
        }
    })
}

/// `FooViewModel` -> `FooView`; any other name gets a `View` suffix.
fn view_name_for(type_name: &str) -> String {
    if type_name.contains("ViewModel") {
        type_name.replace("ViewModel", "View")
    } else {
        format!("{type_name}View")
    }
}

fn host_field(input: &DeriveInput) -> syn::Result<Ident> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Route)] is only supported on structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Route)] requires a struct with named fields",
        ));
    };

    let mut found = None;
    for field in &fields.named {
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("route")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("host") {
                    Ok(())
                } else {
                    Err(meta.error("expected `host`"))
                }
            })?;
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    "only one field can be marked #[route(host)]",
                ));
            }
            found = field.ident.clone();
        }
    }

    found.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "#[derive(Route)] needs a `WeakHost` field marked #[route(host)]",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_name_replaces_view_model() {
        assert_eq!(view_name_for("Page1ViewModel"), "Page1View");
        assert_eq!(view_name_for("Settings"), "SettingsView");
    }

    #[test]
    fn test_host_field_is_required() {
        let input: DeriveInput = syn::parse_quote! {
            struct NoHost { value: u32 }
        };
        assert!(expand_route(&input).is_err());
    }

    #[test]
    fn test_expand_uses_overrides() {
        let input: DeriveInput = syn::parse_quote! {
            #[route(name = "settings", view = "Prefs")]
            struct SettingsViewModel {
                #[route(host)]
                host: WeakHost,
            }
        };
        let tokens = expand_route(&input).unwrap().to_string();
        assert!(tokens.contains("\"settings\""));
        assert!(tokens.contains("\"Prefs\""));
        assert!(tokens.contains("upgrade"));
    }

    #[test]
    fn test_duplicate_host_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            struct Twice {
                #[route(host)]
                a: WeakHost,
                #[route(host)]
                b: WeakHost,
            }
        };
        assert!(expand_route(&input).is_err());
    }
}
