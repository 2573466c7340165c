// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Gamut Derive
//!
//! The `#[derive(Ordinal)]` macro implementing the `gamut::Ordinal` trait
//! for fieldless enums. The generated implementation maps variants onto
//! `0..COUNT` in declaration order with plain integer casts and match arms.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields};

/// Derives `gamut::Ordinal` for a fieldless enum.
///
/// Variants are numbered in declaration order starting at `0`; `NAME` is the
/// enum's identifier and `COUNT` its variant count. Empty enums are accepted
/// and produce `COUNT == 0`.
///
/// The derive rejects, with a compile error:
///
/// - structs and unions,
/// - variants that carry fields,
/// - explicit discriminants (the mapping must stay dense and zero-based),
/// - generic parameters.
///
/// # Examples
///
/// ```rust
/// use gamut::Ordinal;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Ordinal)]
/// enum Cardinal {
///     North,
///     East,
///     South,
///     West,
/// }
///
/// assert_eq!(Cardinal::COUNT, 4);
/// assert_eq!(Cardinal::East.ordinal(), 1);
/// assert_eq!(Cardinal::try_from_ordinal(3), Some(Cardinal::West));
/// ```
#[proc_macro_derive(Ordinal)]
pub fn derive_ordinal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "Ordinal can only be derived for enums",
            ))
        }
    };

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Ordinal cannot be derived for generic enums",
        ));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "Ordinal can only be derived for fieldless enums",
            ));
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            return Err(Error::new_spanned(
                discriminant,
                "Ordinal cannot be derived for enums with explicit discriminants",
            ));
        }
        variants.push(&variant.ident);
    }

    let ident = &input.ident;
    let name = ident.to_string();
    let count = variants.len();
    let positions = 0..count;

    // An empty enum has no values to cast; an empty match coerces instead.
    let ordinal_body = if count == 0 {
        quote!(match self {})
    } else {
        quote!(self as usize)
    };

    Ok(quote! {
        impl ::gamut::Ordinal for #ident {
            const NAME: &'static str = #name;
            const COUNT: usize = #count;

            #[inline]
            fn ordinal(self) -> usize {
                #ordinal_body
            }

            #[inline]
            fn try_from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#positions => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
