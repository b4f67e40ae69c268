use super::{Field, FieldId, PrimaryKey};
use crate::schema::Name;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model, as declared
    pub ident: String,

    /// Name of the model, split into parts
    pub name: Name,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    pub primary_key: PrimaryKey,

    pub meta: ModelMeta,
}

/// Model-level options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMeta {
    /// If the declaration specifies a table to map the model to, this is set.
    pub table_name: Option<String>,

    /// Abstract models are never stored; they only carry fields for others.
    pub is_abstract: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// The declared primary key field, or `None` when the key is implicit.
    pub fn primary_key_field(&self) -> Option<&Field> {
        match self.primary_key {
            PrimaryKey::Auto => None,
            PrimaryKey::Field(index) => Some(&self.fields[index]),
        }
    }

    /// Fields the target ORM registers natively, in declaration order.
    pub fn native_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_native())
    }

    /// Rewrites field ids once the model is assigned its schema id.
    pub(crate) fn assign_id(&mut self, id: ModelId) {
        self.id = id;

        for (index, field) in self.fields.iter_mut().enumerate() {
            field.id = id.field(index);
        }
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }

    /// Id carried by models that are not registered in a schema yet.
    pub const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
