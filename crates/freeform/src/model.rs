use freeform_core::schema::{app, decl::ModelDecl, translate};

/// A type describing a persistent model.
///
/// Usually implemented with `#[derive(freeform::Model)]`.
pub trait Model {
    /// The model's declarative description.
    fn declaration() -> ModelDecl;

    /// Translates the declaration with the default type registry.
    fn definition() -> crate::Result<app::Model> {
        translate(&Self::declaration())
    }
}
