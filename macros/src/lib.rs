use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;

/// Generate a color model with three floating point components.
///
/// The fields are made private and exposed through read-only accessors so the
/// values can not be changed after construction. A `#[clamp(min, max)]`
/// attribute on the struct makes `new` clamp every component into that range.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "models can not be generic")
            .to_compile_error()
            .into();
    }

    let mut clamp = None;
    let mut error = None;
    input.attrs.retain(|attr| {
        if !attr.path().is_ident("clamp") {
            return true;
        }

        match attr.parse_args_with(Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated) {
            Ok(bounds) if bounds.len() == 2 => {
                let mut bounds = bounds.into_iter();
                clamp = bounds.next().zip(bounds.next());
            }
            Ok(_) => {
                error = Some(syn::Error::new_spanned(
                    attr,
                    "expected exactly two bounds: #[clamp(min, max)]",
                ))
            }
            Err(err) => error = Some(err),
        }

        false
    });
    if let Some(error) = error {
        return error.to_compile_error().into();
    }

    let syn::Fields::Named(ref named) = input.fields else {
        return syn::Error::new_spanned(&input, "model components must be named")
            .to_compile_error()
            .into();
    };
    let fields = named.named.iter().cloned().collect::<Vec<_>>();
    let names = fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let types = fields.iter().map(|f| f.ty.clone()).collect::<Vec<_>>();

    let field1 = &names[0];
    let field2 = &names[1];
    let field3 = &names[2];

    // Only the accessors are public, the model can not be mutated.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    let derives: proc_macro2::TokenStream = quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    };
    let attr = syn::Attribute::parse_outer.parse2(derives).unwrap();
    input.attrs.extend(attr);

    let init = names.iter().map(|name| match clamp {
        Some((ref min, ref max)) => quote! { #name: crate::math::clamp(#name, #min, #max) },
        None => quote! { #name },
    });

    let new_doc = match clamp {
        Some((ref min, ref max)) => format!(
            "Create a new color having this color space. Each component is clamped to `{}..={}`.",
            quote!(#min),
            quote!(#max)
        ),
        None => "Create a new color having this color space. Components are stored as given."
            .to_string(),
    };

    let accessors = fields.iter().zip(&types).map(|(field, ty)| {
        let name = &field.ident;
        let docs = field.attrs.iter().filter(|a| a.path().is_ident("doc"));
        quote! {
            #(#docs)*
            pub fn #name(&self) -> #ty {
                self.#name
            }
        }
    });

    let struct_name = input.ident.clone();
    let (type1, type2, type3) = (&types[0], &types[1], &types[2]);

    let model_impl = quote! {
        impl #struct_name {
            #[doc = #new_doc]
            pub fn new(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self {
                    #(#init,)*
                }
            }

            #(#accessors)*

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
