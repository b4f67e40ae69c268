use super::FieldId;
use std::fmt;

/// Cardinality of a relation, seen from the declaring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

/// A relation field, resolved against the rest of the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub kind: RelationKind,

    /// Name of the target model, as declared
    pub target: String,

    /// Name of the accessor on the target model, if declared
    pub related_name: Option<String>,

    /// The field on the target model declaring the reverse side.
    ///
    /// Populated when the relation is registered in a schema.
    pub pair: Option<FieldId>,

    /// True when the reverse side owns the storage for this relation.
    pub passive: bool,
}

impl RelationKind {
    /// The kind the reverse side of a relation of this kind must declare.
    pub fn flip(self) -> Self {
        match self {
            Self::OneToOne => Self::OneToOne,
            Self::ManyToOne => Self::OneToMany,
            Self::OneToMany => Self::ManyToOne,
            Self::ManyToMany => Self::ManyToMany,
        }
    }

    /// Parses the wrapper type name used to annotate a relation field.
    pub fn from_wrapper(name: &str) -> Option<Self> {
        match name {
            "OneToOne" => Some(Self::OneToOne),
            "ManyToOne" | "Foreign" => Some(Self::ManyToOne),
            "OneToMany" | "Reverse" | "ReverseForeign" => Some(Self::OneToMany),
            "ManyToMany" => Some(Self::ManyToMany),
            _ => None,
        }
    }

    /// True if one row may relate to many target rows.
    pub fn is_to_many(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }

    /// True if a field of this kind never owns storage.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::OneToMany)
    }
}

impl Relation {
    /// Name of the reverse accessor on the target model.
    ///
    /// Defaults to the lowercased declaring model name, with a `_set` suffix
    /// unless the relation is one-to-one.
    pub fn reverse_name(&self, model: &str) -> String {
        if let Some(related_name) = &self.related_name {
            return related_name.clone();
        }

        match self.kind {
            RelationKind::OneToOne => model.to_lowercase(),
            _ => format!("{}_set", model.to_lowercase()),
        }
    }

    /// True if the target ORM should register a native field for this side.
    pub fn is_owned(&self) -> bool {
        !self.kind.is_reverse() && !self.passive
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneToOne => "OneToOne",
            Self::ManyToOne => "ManyToOne",
            Self::OneToMany => "OneToMany",
            Self::ManyToMany => "ManyToMany",
        })
    }
}
