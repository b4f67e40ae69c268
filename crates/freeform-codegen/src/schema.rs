mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldAttr};

mod hint;
pub(crate) use hint::Hint;

mod model;
pub(crate) use model::Model;

mod model_attr;
pub(crate) use model_attr::ModelAttr;

mod value;
pub(crate) use value::DefaultValue;
