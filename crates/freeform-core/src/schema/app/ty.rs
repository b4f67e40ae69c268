use super::RelationKind;
use std::fmt;

/// Semantic type tag of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Text,
    DateTime,
    Date,
    Time,
    Duration,
    Uuid,
    Json,
    Binary,
    File,
    Relation(RelationKind),
}

impl Type {
    pub fn is_relation(self) -> bool {
        matches!(self, Self::Relation(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::BigInteger => f.write_str("big integer"),
            Self::Float => f.write_str("float"),
            Self::Decimal => f.write_str("decimal"),
            Self::Text => f.write_str("text"),
            Self::DateTime => f.write_str("date/time"),
            Self::Date => f.write_str("date"),
            Self::Time => f.write_str("time"),
            Self::Duration => f.write_str("duration"),
            Self::Uuid => f.write_str("uuid"),
            Self::Json => f.write_str("json"),
            Self::Binary => f.write_str("binary"),
            Self::File => f.write_str("file"),
            Self::Relation(kind) => write!(f, "relation ({kind})"),
        }
    }
}
