//! Implementation of the `#[derive(Record)]` macro.
//!
//! The schema and the slot values are generated from the same field list, so
//! the two can never disagree on order or count.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_csv_attrs;

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut describes: Vec<TokenStream> = Vec::new();
    let mut collects: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let field_ty = &field.ty;

        let csv_attrs = parse_csv_attrs(&field.attrs)?;

        // #[csv(skip)] fields get no slot at all
        if csv_attrs.skip {
            if csv_attrs.display || csv_attrs.rename.is_some() {
                return Err(Error::new(
                    csv_attrs.span,
                    "`skip` cannot be combined with `rename` or `display`",
                ));
            }
            continue;
        }

        // r#type becomes "type"
        let name = field_name.unraw().to_string();
        let rename = match &csv_attrs.rename {
            Some(r) => quote! { ::core::option::Option::Some(#r) },
            None => quote! { ::core::option::Option::None },
        };

        if csv_attrs.display {
            describes.push(quote! {
                ::csvrow::FieldSchema::Leaf(
                    ::csvrow::Leaf::new(#name, #rename, ::csvrow::FormatKind::Plain)
                )
            });
            collects.push(quote! {
                out.push(::csvrow::Value::Display(&self.#field_name));
            });
        } else {
            describes.push(quote! {
                <#field_ty as ::csvrow::Field>::describe(#name, #rename)
            });
            collects.push(quote! {
                ::csvrow::Field::collect(&self.#field_name, out);
            });
        }
    }

    let expanded = quote! {
        impl #impl_generics ::csvrow::Record for #struct_name #ty_generics #where_clause {
            fn schema() -> ::csvrow::Schema {
                ::csvrow::Schema::new(::std::vec![#(#describes),*])
            }

            #[allow(unused_variables)]
            fn collect_values<'__csv>(
                &'__csv self,
                out: &mut ::std::vec::Vec<::csvrow::Value<'__csv>>,
            ) {
                #(#collects)*
            }
        }

        impl #impl_generics ::csvrow::Field for #struct_name #ty_generics #where_clause {
            fn describe(
                _name: &str,
                _rename: ::core::option::Option<&str>,
            ) -> ::csvrow::FieldSchema {
                ::csvrow::FieldSchema::Embedded(<Self as ::csvrow::Record>::schema())
            }

            fn collect<'__csv>(
                &'__csv self,
                out: &mut ::std::vec::Vec<::csvrow::Value<'__csv>>,
            ) {
                ::csvrow::Record::collect_values(self, out)
            }
        }
    };

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        record_derive_impl(input).unwrap().to_string()
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! { struct Pair(u32, u32); };
        let err = record_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = parse_quote! { enum Kind { A, B } };
        let err = record_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn test_emits_record_and_field_impls() {
        let out = expand(parse_quote! {
            struct Person { name: String }
        });
        assert!(out.contains(":: csvrow :: Record for Person"));
        assert!(out.contains(":: csvrow :: Field for Person"));
        assert!(out.contains("FieldSchema :: Embedded"));
    }

    #[test]
    fn test_skip_leaves_no_slot() {
        let out = expand(parse_quote! {
            struct Person {
                name: String,
                #[csv(skip)]
                cache: Vec<u8>,
            }
        });
        assert!(out.contains("\"name\""));
        assert!(!out.contains("cache"));
    }

    #[test]
    fn test_skip_rejects_other_keys() {
        let input: DeriveInput = parse_quote! {
            struct Person {
                #[csv(skip, rename = "Name")]
                name: String,
            }
        };
        let err = record_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_rename_is_passed_through() {
        let out = expand(parse_quote! {
            struct Person {
                #[csv(rename = "Full Name")]
                name: String,
            }
        });
        assert!(out.contains("Some (\"Full Name\")"));
    }

    #[test]
    fn test_raw_identifier_is_unraw() {
        let out = expand(parse_quote! {
            struct Token { r#type: String }
        });
        assert!(out.contains("describe (\"type\""));
    }

    #[test]
    fn test_display_field_bypasses_field_trait() {
        let out = expand(parse_quote! {
            struct Task {
                #[csv(display)]
                status: Status,
            }
        });
        assert!(out.contains("Value :: Display"));
        assert!(!out.contains("< Status as :: csvrow :: Field >"));
    }

    #[test]
    fn test_generics_are_forwarded() {
        let out = expand(parse_quote! {
            struct Wrapper<T: ::csvrow::Field> { inner: T }
        });
        assert!(out.contains("Record for Wrapper < T >"));
    }
}
