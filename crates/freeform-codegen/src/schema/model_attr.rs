use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the model to
    pub(crate) table: Option<syn::LitStr>,

    /// The model only lends its fields to others
    pub(crate) is_abstract: bool,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("model") {
                continue;
            }

            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if self.table.is_some() {
                        errs.push(meta.error("duplicate `table` model option"));
                    } else {
                        self.table = Some(lit);
                    }
                    Ok(())
                } else if meta.path.is_ident("abstract") {
                    if self.is_abstract {
                        errs.push(meta.error("duplicate `abstract` model option"));
                    }
                    self.is_abstract = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown model option; expected `table` or `abstract`"))
                }
            });

            errs.check(parsed);
        }

        errs.finish()
    }
}
