use super::Expand;

use freeform_core::schema::app::FieldKind;
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Rebuilds a parsed `kind = ...` override as a `FieldKind` expression.
    pub(super) fn expand_kind(&self, kind: &FieldKind) -> TokenStream {
        let freeform = &self.freeform;
        let ty = quote!(#freeform::FieldKind);

        match kind {
            FieldKind::AutoId => quote!(#ty::AutoId),
            FieldKind::Char { max_length } => quote!(#ty::Char { max_length: #max_length }),
            FieldKind::Text => quote!(#ty::Text),
            FieldKind::Slug { max_length } => quote!(#ty::Slug { max_length: #max_length }),
            FieldKind::Email { max_length } => quote!(#ty::Email { max_length: #max_length }),
            FieldKind::Integer => quote!(#ty::Integer),
            FieldKind::BigInteger => quote!(#ty::BigInteger),
            FieldKind::Float => quote!(#ty::Float),
            FieldKind::Decimal {
                max_digits,
                decimal_places,
            } => quote!(#ty::Decimal {
                max_digits: #max_digits,
                decimal_places: #decimal_places,
            }),
            FieldKind::Boolean => quote!(#ty::Boolean),
            FieldKind::DateTime => quote!(#ty::DateTime),
            FieldKind::Date => quote!(#ty::Date),
            FieldKind::Time => quote!(#ty::Time),
            FieldKind::Duration => quote!(#ty::Duration),
            FieldKind::Uuid => quote!(#ty::Uuid),
            FieldKind::Json => quote!(#ty::Json),
            FieldKind::Binary => quote!(#ty::Binary),
            FieldKind::File { upload_to } => {
                let upload_to = expand_upload_to(upload_to.as_deref());
                quote!(#ty::File { upload_to: #upload_to })
            }
            FieldKind::Image { upload_to } => {
                let upload_to = expand_upload_to(upload_to.as_deref());
                quote!(#ty::Image { upload_to: #upload_to })
            }
            // The kind parser never produces relation kinds
            FieldKind::ForeignKey { .. }
            | FieldKind::OneToOne { .. }
            | FieldKind::ManyToMany { .. }
            | FieldKind::Reverse { .. } => {
                syn::Error::new(
                    proc_macro2::Span::call_site(),
                    "relation kinds cannot be overridden",
                )
                .to_compile_error()
            }
        }
    }
}

fn expand_upload_to(path: Option<&str>) -> TokenStream {
    match path {
        Some(path) => quote!(::std::option::Option::Some(#path.to_string())),
        None => quote!(::std::option::Option::None),
    }
}
