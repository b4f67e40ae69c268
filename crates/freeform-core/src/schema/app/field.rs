use super::{Constraint, FieldKind, ModelId, Relation, Type};
use crate::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Primitive or relation
    pub ty: FieldTy,

    /// Native field type emitted for the target ORM
    pub kind: FieldKind,

    /// True if the field can be nullable (`None` in Rust).
    pub nullable: bool,

    /// True if the field is the model's primary key
    pub primary_key: bool,

    /// Value used when none is provided
    pub default: Option<Value>,

    /// Any additional field constraints
    pub constraints: Vec<Constraint>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    Primitive(Type),
    Relation(Relation),
}

impl Field {
    /// The declared semantic type of the field.
    pub fn declared_type(&self) -> Type {
        match &self.ty {
            FieldTy::Primitive(ty) => *ty,
            FieldTy::Relation(relation) => Type::Relation(relation.kind),
        }
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    pub fn max_length(&self) -> Option<u64> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::MaxLength { max } => Some(*max),
            _ => None,
        })
    }

    pub fn is_unique(&self) -> bool {
        self.constraints.contains(&Constraint::Unique)
    }

    pub fn is_blank(&self) -> bool {
        self.constraints.contains(&Constraint::Blank)
    }

    /// Keys hold exactly one value per row: never null, never a to-many
    /// relation.
    pub fn can_be_primary_key(&self) -> bool {
        match &self.ty {
            _ if self.nullable => false,
            FieldTy::Primitive(_) => true,
            FieldTy::Relation(relation) => !relation.kind.is_to_many(),
        }
    }

    /// True if the target ORM registers a native field for this descriptor.
    ///
    /// Reverse relations and the passive side of a paired relation are only
    /// kept for typing and checks.
    pub fn is_native(&self) -> bool {
        match &self.ty {
            FieldTy::Primitive(_) => true,
            FieldTy::Relation(relation) => relation.is_owned(),
        }
    }

    /// Renders the native declaration, e.g.
    /// `name = CharField(max_length=100, null=true)`.
    pub fn native_declaration(&self) -> String {
        let mut args: Vec<(&str, String)> = self.kind.args();

        if self.kind.max_length().is_none() {
            if let Some(max) = self.max_length() {
                args.push(("max_length", max.to_string()));
            }
        }
        if let FieldTy::Relation(Relation {
            related_name: Some(related_name),
            ..
        }) = &self.ty
        {
            args.push(("related_name", format!("{related_name:?}")));
        }
        if let Some(storage_name) = &self.name.storage_name {
            args.push(("db_column", format!("{storage_name:?}")));
        }
        if self.primary_key {
            args.push(("primary_key", "true".to_string()));
        }
        if self.nullable {
            args.push(("null", "true".to_string()));
        }
        if self.is_blank() {
            args.push(("blank", "true".to_string()));
        }
        if self.is_unique() {
            args.push(("unique", "true".to_string()));
        }
        if let Some(default) = &self.default {
            args.push(("default", default.to_string()));
        }

        let args = args
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} = {}({args})",
            self.name.app_name,
            self.kind.native_name()
        )
    }
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl FieldTy {
    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(..))
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Self::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_relation(&self) -> &Relation {
        match self {
            Self::Relation(relation) => relation,
            _ => panic!("expected relation field, but was {self:?}"),
        }
    }

    pub(crate) fn as_relation_mut(&mut self) -> Option<&mut Relation> {
        match self {
            Self::Relation(relation) => Some(relation),
            _ => None,
        }
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
