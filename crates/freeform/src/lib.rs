pub mod app;
pub use app::App;

pub mod fields;
pub use fields::{Email, File, Image, Slug, Text};

mod model;
pub use model::Model;

pub mod relation;
pub use relation::{Foreign, ManyToMany, ManyToOne, OneToMany, OneToOne, Reverse, ReverseForeign};

pub use freeform_core::{schema, Config, Error, Result, Schema, Value};
pub use freeform_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::Model;
    pub use freeform_core::{
        schema::{
            app::FieldKind,
            decl::{FieldDecl, ModelDecl, TypeHint},
        },
        Value,
    };
}
