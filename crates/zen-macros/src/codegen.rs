//! Code generation for `#[derive(ResponsiveProps)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::parse::PropsStruct;

/// Generate the `ResponsiveProps` impl.
pub fn generate(input: &DeriveInput, props: &PropsStruct) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let entries = props.fields.iter().map(|field| {
        let ident = &field.ident;
        let prop_name = &field.prop_name;
        quote! {
            (#prop_name, ::zcss::attr_entry(self.#ident.as_ref()))
        }
    });

    quote! {
        impl #impl_generics ::zcss::ResponsiveProps for #name #ty_generics #where_clause {
            fn responsive_props(&self) -> ::std::vec::Vec<::zcss::PropEntry> {
                ::std::vec![#(#entries),*]
            }
        }
    }
}
