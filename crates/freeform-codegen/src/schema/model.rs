use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, without skipped ones
    pub(crate) fields: Vec<Field>,

    /// Options from `#[model(...)]`
    pub(crate) attrs: ModelAttr,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut attrs = ModelAttr::default();
        let mut fields = vec![];

        errs.check(attrs.populate_from_ast(&ast.attrs));

        for node in &node.named {
            if let Some(Some(field)) = errs.check(Field::from_ast(node, &ast.ident)) {
                fields.push(field);
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            attrs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn lower_model() {
        let item: syn::ItemStruct = parse_quote! {
            #[model(table = "people", abstract)]
            struct Person {
                name: String,
                #[field(skip)]
                scratch: Vec<u8>,
                parent: Option<ManyToOne<Self>>,
            }
        };

        let model = Model::from_ast(&item).unwrap();
        assert_eq!(model.ident, "Person");
        assert_eq!(model.attrs.table.unwrap().value(), "people");
        assert!(model.attrs.is_abstract);

        let names = model.fields.iter().map(Field::name).collect::<Vec<_>>();
        assert_eq!(names, ["name", "parent"]);
    }

    #[test]
    fn reject_tuple_structs_and_generics() {
        let item: syn::ItemStruct = parse_quote!(struct Pair(u8, u8););
        assert!(Model::from_ast(&item).is_err());

        let item: syn::ItemStruct = parse_quote!(struct Wrapper<T> { inner: T });
        assert_eq!(
            Model::from_ast(&item).unwrap_err().to_string(),
            "model generics are not supported"
        );
    }

    #[test]
    fn errors_from_every_field_are_reported() {
        let item: syn::ItemStruct = parse_quote! {
            #[model(tabel = "people")]
            struct Person {
                #[field(max_length = "ten")]
                name: String,
                #[field(default = Vec::new())]
                tags: Vec<String>,
            }
        };

        let err = Model::from_ast(&item).unwrap_err();
        assert_eq!(err.into_iter().count(), 3);
    }
}
