//! Translated model definitions

mod constraint;
pub use constraint::Constraint;

mod field;
pub use field::{Field, FieldId, FieldName, FieldTy};

mod kind;
pub use kind::{FieldKind, OnDelete};

mod model;
pub use model::{Model, ModelId, ModelMeta};

mod pk;
pub use pk::PrimaryKey;

mod relation;
pub use relation::{Relation, RelationKind};

mod ty;
pub use ty::Type;
