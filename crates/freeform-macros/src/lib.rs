extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `freeform::Model`, describing the struct as a model declaration.
///
/// ```ignore
/// #[derive(freeform::Model)]
/// #[model(table = "articles")]
/// struct Article {
///     #[field(max_length = 100)]
///     title: String,
///     author: freeform::ManyToOne<Author>,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model, field))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match freeform_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
