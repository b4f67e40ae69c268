//! Declarative model descriptions, as written by the user.
//!
//! A [`ModelDecl`] is what `#[derive(Model)]` generates and what the CLI
//! reads from its model files. The [translator](super::Translator) turns it
//! into an [`app::Model`](super::app::Model).

mod hint;
pub use hint::TypeHint;

pub use super::app::ModelMeta;

use super::app::FieldKind;
use crate::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelDecl {
    /// Model name
    pub name: String,

    /// Declared fields, in declaration order
    pub fields: Vec<FieldDecl>,

    pub meta: ModelMeta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Field name
    pub name: String,

    /// Annotated type
    pub hint: TypeHint,

    /// Default value; on relation fields a string names the reverse accessor
    pub default: Option<Value>,

    pub options: FieldOptions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub max_length: Option<u64>,
    pub unique: bool,
    pub blank: bool,
    pub primary_key: bool,

    /// Name of the reverse accessor on a relation's target model
    pub related_name: Option<String>,

    /// Storage name, when it differs from the field name
    pub column: Option<String>,

    /// Native kind to use instead of the type registry's mapping
    pub kind: Option<FieldKind>,
}

impl ModelDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
            meta: ModelMeta::default(),
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.meta.table_name = Some(table_name.into());
        self
    }

    pub fn set_abstract(mut self) -> Self {
        self.meta.is_abstract = true;
        self
    }
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, hint: impl Into<TypeHint>) -> Self {
        Self {
            name: name.into(),
            hint: hint.into(),
            default: None,
            options: FieldOptions::default(),
        }
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn max_length(mut self, max_length: u64) -> Self {
        self.options.max_length = Some(max_length);
        self
    }

    pub fn unique(mut self) -> Self {
        self.options.unique = true;
        self
    }

    pub fn blank(mut self) -> Self {
        self.options.blank = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.options.primary_key = true;
        self
    }

    pub fn related(mut self, related_name: impl Into<String>) -> Self {
        self.options.related_name = Some(related_name.into());
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.options.column = Some(column.into());
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.options.kind = Some(kind);
        self
    }
}
