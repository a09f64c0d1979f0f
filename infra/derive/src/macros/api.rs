use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemFn, ItemStruct, Lit, LitStr, Meta, Token};

/// Expands `#[api_model]`: common derives, optional `ToSchema` and the serde rename policy.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let rename_all = match parse_rename_all(args) {
        Ok(value) => value,
        Err(err) => return err.to_compile_error(),
    };
    let existing_rename = match serde_rename_all(&input.attrs) {
        Ok(value) => value,
        Err(err) => return err.to_compile_error(),
    };

    let derives = derived_trait_names(&input.attrs);
    let mut tokens = Vec::new();
    if !derives.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        tokens.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        tokens.push(quote! { ::serde::Deserialize });
    }
    let derive_attr = if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename_attr = match existing_rename {
        Some(existing) if existing.value() != rename_all.value() => {
            return syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or pass the same value to api_model",
            )
            .to_compile_error();
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename_all)] },
    };

    quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #input
    }
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` behind the `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = &input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_rename_all(args: TokenStream) -> syn::Result<LitStr> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut rename_all = None;

    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(meta, "Expected `rename_all = \"...\"`"));
        };
        if !name_value.path.is_ident("rename_all") {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected rename_all",
            ));
        }
        let Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) = &name_value.value else {
            return Err(syn::Error::new_spanned(
                &name_value.value,
                "rename_all must be a string literal",
            ));
        };
        if rename_all.replace(lit.clone()).is_some() {
            return Err(syn::Error::new_spanned(name_value, "Duplicate argument"));
        }
    }

    Ok(rename_all.unwrap_or_else(|| LitStr::new("camelCase", proc_macro2::Span::call_site())))
}

fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename_all = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.input.peek(Token![=]) {
                // Skip the value of unrelated `key = value` options.
                meta.value()?.parse::<Expr>()?;
            } else if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<TokenStream>()?;
            }
            Ok(())
        })?;
    }

    Ok(rename_all)
}
