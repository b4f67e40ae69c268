pub mod app;

mod builder;
pub use builder::Builder;

mod check;
pub use check::Warning;

pub mod decl;

mod name;
pub use name::Name;

mod registry;
pub use registry::{FieldLookup, TypeRegistry};

mod relations;
use relations::Relations;

mod translate;
pub use translate::{translate, Translator};

use app::{Field, FieldId, Model, ModelId};
use indexmap::IndexMap;

/// A set of translated models, with their relations paired.
#[derive(Debug)]
pub struct Schema {
    /// Translated models, in registration order
    pub models: IndexMap<ModelId, Model>,

    /// Optional label prefixing table names and check objects
    pub app_label: Option<String>,

    relations: Relations,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models().find(|model| model.ident == name)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    /// Table the target ORM should store `model` in.
    pub fn table_name(&self, model: &Model) -> String {
        if let Some(table_name) = &model.meta.table_name {
            return table_name.clone();
        }

        model.name.table_name(self.app_label.as_deref())
    }
}
