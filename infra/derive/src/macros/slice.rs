use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct};

pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let ItemStruct { attrs, vis, ident, generics, fields, .. } = &input;

    if !generics.params.is_empty() {
        return syn::Error::new_spanned(generics, "ipnt_slice does not support generic slices")
            .to_compile_error();
    }

    let inner = format_ident!("{ident}Inner");
    let body = match fields {
        Fields::Named(named) => quote! { #named },
        Fields::Unnamed(unnamed) => quote! { #unnamed; },
        Fields::Unit => quote! { {} },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[derive(Debug, Clone)]
        #vis struct #ident {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #ident {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #ident {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::ipnt_kernel::domain::registry::FeatureSlice for #ident {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
