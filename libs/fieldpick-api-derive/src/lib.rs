use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, LitStr};

/// Derive macro for record introspection.
///
/// Generates two impls on the annotated struct:
///
/// - `fieldpick_api::Record`: `flatten()` returns a `Mapping` with one entry
///   per field, each converted through `ToValue`. Nested records expand into
///   nested mappings recursively.
/// - `fieldpick_api::ToValue`: `Value::Map(self.flatten())`, so the struct
///   can itself be a field of another record.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct User {
///     #[record(rename = "ID")]
///     pub id: String,
///
///     pub address: Option<Address>,
///
///     #[record(skip)]
///     pub password_hash: String,
/// }
/// ```
///
/// Every field type must implement `ToValue`. Type parameters get a
/// `ToValue` bound automatically.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_impl(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record only supports structs",
            ))
        }
    };

    let mut insert_tokens = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected named field")
        })?;

        // Parse #[record(...)] attribute.
        let mut rename: Option<String> = None;
        let mut skip = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    rename = Some(value.value());
                } else if meta.path.is_ident("skip") {
                    skip = true;
                } else {
                    return Err(meta.error("unknown record attribute (expected 'rename' or 'skip')"));
                }
                Ok(())
            })?;
        }

        if skip {
            continue;
        }

        let key = rename.unwrap_or_else(|| field_name.to_string());
        if key.is_empty() || key.contains('.') {
            return Err(syn::Error::new_spanned(
                field_name,
                format!("record key '{key}' must be non-empty and must not contain '.'"),
            ));
        }

        insert_tokens.push(quote! {
            __map.insert(#key, fieldpick_api::ToValue::to_value(&self.#field_name));
        });
    }

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(fieldpick_api::ToValue));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics fieldpick_api::Record for #name #ty_generics #where_clause {
            fn flatten(&self) -> fieldpick_api::Mapping {
                #[allow(unused_mut)]
                let mut __map = fieldpick_api::Mapping::new();
                #(#insert_tokens)*
                __map
            }
        }

        impl #impl_generics fieldpick_api::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> fieldpick_api::Value {
                fieldpick_api::Value::Map(fieldpick_api::Record::flatten(self))
            }
        }
    };

    Ok(TokenStream::from(expanded))
}
