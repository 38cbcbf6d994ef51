use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that turns a per-step record into a column-oriented series.
///
/// Every field of the source struct must be `f64`. The generated struct
/// (`{StructName}Series` by default) holds one `Vec<f64>` per field and gets
/// `with_capacity`, `push`, `len`, `is_empty`, `last`, `column` and `columns`.
/// The source struct gains a `field_names()` associated function.
///
/// Use `#[timeseries(name = "CustomName")]` to override the generated name.
#[proc_macro_derive(Timeseries, attributes(timeseries))]
pub fn derive_timeseries(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let vis = &input.vis;

    let series_name =
        extract_series_name(&input).unwrap_or_else(|| format_ident!("{}Series", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Timeseries can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Timeseries can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Timeseries struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_idents = Vec::new();
    let mut field_names = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Timeseries derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        field_names.push(ident.to_string());
        field_idents.push(ident);
    }

    let first_field = field_idents[0];
    let field_name_strs: Vec<&str> = field_names.iter().map(String::as_str).collect();
    let series_doc = format!("Column-oriented series of [`{name}`] records, one entry per step.");

    let expanded = quote! {
        #[doc = #series_doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #series_name {
            #(pub #field_idents: Vec<f64>,)*
        }

        impl #series_name {
            /// Pre-allocate every column for `n` steps.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#field_idents: Vec::with_capacity(n),)*
                }
            }

            /// Append one step.
            pub fn push(&mut self, record: &#name) {
                #(self.#field_idents.push(record.#field_idents);)*
            }

            /// Number of steps stored.
            pub fn len(&self) -> usize {
                self.#first_field.len()
            }

            /// Returns `true` if no steps have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first_field.is_empty()
            }

            /// The most recently pushed record, if any.
            pub fn last(&self) -> Option<#name> {
                let i = self.len().checked_sub(1)?;
                Some(#name {
                    #(#field_idents: self.#field_idents[i],)*
                })
            }

            /// Look up a column by field name.
            pub fn column(&self, name: &str) -> Option<&[f64]> {
                match name {
                    #(#field_name_strs => Some(self.#field_idents.as_slice()),)*
                    _ => None,
                }
            }

            /// All columns in declaration order, paired with their names.
            pub fn columns(&self) -> Vec<(&'static str, &[f64])> {
                vec![#((#field_name_strs, self.#field_idents.as_slice()),)*]
            }
        }

        impl #name {
            /// Field names in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }
        }
    };

    expanded.into()
}

fn extract_series_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if !attr.path().is_ident("timeseries") {
            continue;
        }
        let nested = attr
            .parse_args_with(
                syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
            )
            .ok()?;
        for meta in nested {
            if let Meta::NameValue(nv) = meta {
                if nv.path.is_ident("name") {
                    if let syn::Expr::Lit(expr_lit) = &nv.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            return Some(format_ident!("{}", lit_str.value()));
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(type_path) if type_path.path.is_ident("f64"))
}
