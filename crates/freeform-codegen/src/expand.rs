mod kind;

use crate::schema::{DefaultValue, Field, Hint, Model};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for freeform types
    freeform: TokenStream,
}

pub(super) fn model(model: &Model) -> TokenStream {
    let expand = Expand {
        model,
        freeform: quote!(_freeform::codegen_support),
    };

    wrap_in_const(expand.expand_model_impl())
}

impl Expand<'_> {
    fn expand_model_impl(&self) -> TokenStream {
        let freeform = &self.freeform;
        let model_ident = &self.model.ident;
        let name = model_ident.to_string();
        let meta = self.expand_model_meta();
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        quote! {
            impl #freeform::Model for #model_ident {
                fn declaration() -> #freeform::ModelDecl {
                    #freeform::ModelDecl::new(#name)
                        #meta
                        #( .field(#fields) )*
                }
            }
        }
    }

    fn expand_model_meta(&self) -> TokenStream {
        let attrs = &self.model.attrs;

        let table = attrs.table.as_ref().map(|table| quote!(.table(#table)));
        let is_abstract = attrs.is_abstract.then(|| quote!(.set_abstract()));

        quote!(#table #is_abstract)
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let freeform = &self.freeform;
        let attrs = &field.attrs;
        let name = field.name();
        let hint = self.expand_hint(&field.hint);

        let mut options = vec![];

        if let Some(max_length) = attrs.max_length {
            options.push(quote!(.max_length(#max_length)));
        }
        if attrs.unique {
            options.push(quote!(.unique()));
        }
        if attrs.blank {
            options.push(quote!(.blank()));
        }
        if attrs.primary_key {
            options.push(quote!(.primary_key()));
        }
        if let Some(default) = &attrs.default {
            let value = self.expand_value(default);
            options.push(quote!(.default(#value)));
        }
        if let Some(related) = &attrs.related {
            options.push(quote!(.related(#related)));
        }
        if let Some(column) = &attrs.column {
            options.push(quote!(.column(#column)));
        }
        if let Some(kind) = &attrs.kind {
            let kind = self.expand_kind(kind);
            options.push(quote!(.kind(#kind)));
        }

        quote! {
            #freeform::FieldDecl::new(#name, #hint) #(#options)*
        }
    }

    fn expand_hint(&self, hint: &Hint) -> TokenStream {
        let freeform = &self.freeform;

        match hint {
            Hint::Named { name, args } => {
                let args = args.iter().map(|arg| self.expand_hint(arg));
                quote!(#freeform::TypeHint::named(#name, vec![#(#args),*]))
            }
            Hint::Opaque(src) => quote!(#freeform::TypeHint::opaque(#src)),
        }
    }

    fn expand_value(&self, value: &DefaultValue) -> TokenStream {
        let freeform = &self.freeform;

        match value {
            DefaultValue::Bool(value) => quote!(#freeform::Value::Bool(#value)),
            DefaultValue::I64(value) => quote!(#freeform::Value::I64(#value)),
            DefaultValue::F64(value) => quote!(#freeform::Value::F64(#value)),
            DefaultValue::String(value) => {
                quote!(#freeform::Value::String(#value.to_string()))
            }
        }
    }
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use freeform as _freeform;
            #code
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::generate;
    use pretty_assertions::assert_eq;
    use proc_macro2::TokenStream;
    use quote::quote;

    fn expand(input: TokenStream) -> String {
        generate(input).unwrap().to_string()
    }

    #[test]
    fn expands_model_declaration() {
        let output = expand(quote! {
            #[model(table = "people")]
            struct Person {
                #[field(max_length = 100, default = "anon")]
                name: String,
                parent: Option<ManyToOne<Self>>,
            }
        });

        let expected = quote! {
            const _: () = {
                use freeform as _freeform;
                impl _freeform::codegen_support::Model for Person {
                    fn declaration() -> _freeform::codegen_support::ModelDecl {
                        _freeform::codegen_support::ModelDecl::new("Person")
                            .table("people")
                            .field(
                                _freeform::codegen_support::FieldDecl::new(
                                    "name",
                                    _freeform::codegen_support::TypeHint::named("String", vec![])
                                )
                                .max_length(100u64)
                                .default(_freeform::codegen_support::Value::String(
                                    "anon".to_string()
                                ))
                            )
                            .field(
                                _freeform::codegen_support::FieldDecl::new(
                                    "parent",
                                    _freeform::codegen_support::TypeHint::named(
                                        "Option",
                                        vec![_freeform::codegen_support::TypeHint::named(
                                            "ManyToOne",
                                            vec![_freeform::codegen_support::TypeHint::named(
                                                "Person",
                                                vec![]
                                            )]
                                        )]
                                    )
                                )
                            )
                    }
                }
            };
        };

        assert_eq!(output, expected.to_string());
    }

    #[test]
    fn opaque_types_are_kept_as_text() {
        let output = expand(quote! {
            struct Pixel {
                rgb: (u8, u8, u8),
            }
        });

        assert!(output.contains("TypeHint :: opaque (\"(u8, u8, u8)\")"));
    }
}
