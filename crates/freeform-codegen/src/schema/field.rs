use super::{DefaultValue, ErrorSet, Hint};

use freeform_core::schema::app::FieldKind;
use quote::ToTokens;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Lowered field type
    pub(crate) hint: Hint,

    /// Options from `#[field(...)]`
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    pub(crate) max_length: Option<u64>,
    pub(crate) unique: bool,
    pub(crate) blank: bool,
    pub(crate) primary_key: bool,

    /// Literal default value
    pub(crate) default: Option<DefaultValue>,

    /// Reverse accessor name on the relation target
    pub(crate) related: Option<syn::LitStr>,

    /// Storage name override
    pub(crate) column: Option<syn::LitStr>,

    /// Native kind override, validated at expansion time
    pub(crate) kind: Option<FieldKind>,

    /// The field is not part of the model
    pub(crate) skip: bool,
}

impl Field {
    /// Lowers a struct field, returning `None` for `#[field(skip)]`.
    pub(super) fn from_ast(
        field: &syn::Field,
        model_ident: &syn::Ident,
    ) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("field") {
                if let Err(err) = attrs.populate_from_ast(attr) {
                    errs.push(err);
                }
            }
        }

        errs.finish()?;

        if attrs.skip {
            return Ok(None);
        }

        Ok(Some(Self {
            ident: ident.clone(),
            hint: Hint::from_ast(&field.ty, model_ident),
            attrs,
        }))
    }

    pub(crate) fn name(&self) -> String {
        // Raw identifiers keep their `r#` prefix in `to_string`
        let name = self.ident.to_string();
        name.strip_prefix("r#").map(String::from).unwrap_or(name)
    }
}

impl FieldAttr {
    fn populate_from_ast(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        let parsed = attr.parse_nested_meta(|meta| {
            let path = &meta.path;

            if path.is_ident("max_length") {
                let lit: syn::LitInt = meta.value()?.parse()?;
                let value = lit.base10_parse()?;
                set(&mut errs, &mut self.max_length, value, path)
            } else if path.is_ident("unique") {
                set_flag(&mut errs, &mut self.unique, path)
            } else if path.is_ident("blank") {
                set_flag(&mut errs, &mut self.blank, path)
            } else if path.is_ident("primary_key") {
                set_flag(&mut errs, &mut self.primary_key, path)
            } else if path.is_ident("skip") {
                set_flag(&mut errs, &mut self.skip, path)
            } else if path.is_ident("default") {
                let expr: syn::Expr = meta.value()?.parse()?;
                let value = DefaultValue::from_ast(&expr)?;
                set(&mut errs, &mut self.default, value, path)
            } else if path.is_ident("related") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                set(&mut errs, &mut self.related, lit, path)
            } else if path.is_ident("column") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                set(&mut errs, &mut self.column, lit, path)
            } else if path.is_ident("kind") {
                let expr: syn::Expr = meta.value()?.parse()?;
                let kind = parse_kind(&expr)?;
                set(&mut errs, &mut self.kind, kind, path)
            } else {
                Err(meta.error(
                    "unknown field option; expected one of `max_length`, `unique`, `blank`, \
                     `primary_key`, `default`, `related`, `column`, `kind`, `skip`",
                ))
            }
        });

        if let Err(err) = parsed {
            errs.push(err);
        }

        errs.finish()
    }
}

/// Parses `kind = char(100)` and friends with the runtime kind parser, so
/// typos fail the build instead of the translation.
fn parse_kind(expr: &syn::Expr) -> syn::Result<FieldKind> {
    let src = expr.to_token_stream().to_string();

    src.parse()
        .map_err(|err| syn::Error::new_spanned(expr, format!("invalid field kind: {err}")))
}

fn set<T>(
    errs: &mut ErrorSet,
    slot: &mut Option<T>,
    value: T,
    path: &syn::Path,
) -> syn::Result<()> {
    if slot.is_some() {
        errs.push(duplicate(path));
    } else {
        *slot = Some(value);
    }
    Ok(())
}

fn set_flag(errs: &mut ErrorSet, flag: &mut bool, path: &syn::Path) -> syn::Result<()> {
    if *flag {
        errs.push(duplicate(path));
    }
    *flag = true;
    Ok(())
}

fn duplicate(path: &syn::Path) -> syn::Error {
    let name = path.to_token_stream().to_string();
    syn::Error::new_spanned(path, format!("duplicate `{name}` field option"))
}
