use super::{
    app::{FieldKind, Type},
    decl::TypeHint,
};
use crate::Config;

use indexmap::IndexMap;

/// What a type hint translates to.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLookup {
    /// Semantic type recorded on the field descriptor
    pub ty: Type,

    /// Native kind emitted for the target ORM
    pub kind: FieldKind,
}

/// Lookup table from type hint names to field kinds.
///
/// Keys are either a full hint rendering (`Vec<u8>`) or a bare type name
/// (`Vec`). Full renderings are tried first so specific instantiations can
/// override their generic origin.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    lookups: IndexMap<String, FieldLookup>,
}

impl FieldLookup {
    pub fn new(ty: Type, kind: FieldKind) -> Self {
        Self { ty, kind }
    }
}

impl TypeRegistry {
    /// An empty registry. Every named hint is unsupported until registered.
    pub fn new() -> Self {
        Self {
            lookups: IndexMap::new(),
        }
    }

    /// The built-in mappings, parameterized by `config`.
    pub fn from_config(config: &Config) -> Self {
        use FieldKind::*;

        let mut registry = Self::new();

        let char_field = Char {
            max_length: config.char_max_length,
        };
        let decimal = Decimal {
            max_digits: config.decimal_max_digits,
            decimal_places: config.decimal_places,
        };

        for name in ["String", "str", "char"] {
            registry.insert(name, Type::Text, char_field.clone());
        }
        for name in ["i8", "i16", "i32", "u8", "u16"] {
            registry.insert(name, Type::Integer, Integer);
        }
        for name in ["i64", "u32", "u64", "isize", "usize"] {
            registry.insert(name, Type::BigInteger, BigInteger);
        }
        for name in ["f32", "f64"] {
            registry.insert(name, Type::Float, Float);
        }
        registry.insert("bool", Type::Boolean, Boolean);
        for name in ["Decimal", "BigDecimal"] {
            registry.insert(name, Type::Decimal, decimal.clone());
        }
        for name in [
            "NaiveDateTime",
            "DateTime",
            "SystemTime",
            "Timestamp",
            "OffsetDateTime",
            "PrimitiveDateTime",
            "Zoned",
        ] {
            registry.insert(name, Type::DateTime, DateTime);
        }
        for name in ["NaiveDate", "Date"] {
            registry.insert(name, Type::Date, Date);
        }
        for name in ["NaiveTime", "Time"] {
            registry.insert(name, Type::Time, Time);
        }
        for name in ["Duration", "TimeDelta", "SignedDuration"] {
            registry.insert(name, Type::Duration, Duration);
        }
        registry.insert("Uuid", Type::Uuid, Uuid);
        for name in ["Vec", "HashMap", "BTreeMap", "HashSet", "BTreeSet", "Value"] {
            registry.insert(name, Type::Json, Json);
        }
        for name in ["Vec<u8>", "Bytes"] {
            registry.insert(name, Type::Binary, Binary);
        }

        // Marker types exported by the facade crate
        registry.insert("Text", Type::Text, Text);
        registry.insert(
            "Slug",
            Type::Text,
            Slug {
                max_length: config.slug_max_length,
            },
        );
        registry.insert(
            "Email",
            Type::Text,
            Email {
                max_length: config.email_max_length,
            },
        );
        registry.insert(
            "File",
            Type::File,
            File {
                upload_to: Some(config.upload_to.clone()),
            },
        );
        registry.insert(
            "Image",
            Type::File,
            Image {
                upload_to: Some(config.upload_to.clone()),
            },
        );

        registry
    }

    /// Map a new (or existing) type name to a field lookup.
    pub fn register(&mut self, name: impl Into<String>, lookup: FieldLookup) -> &mut Self {
        self.lookups.insert(name.into(), lookup);
        self
    }

    /// Resolve a named hint. `Option`, relation and opaque hints never
    /// resolve here.
    pub fn lookup(&self, hint: &TypeHint) -> Option<&FieldLookup> {
        let TypeHint::Named { name, args } = hint else {
            return None;
        };

        if !args.is_empty() {
            if let Some(lookup) = self.lookups.get(&hint.to_string()) {
                return Some(lookup);
            }
        }

        self.lookups.get(name)
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lookups.keys().map(String::as_str)
    }

    fn insert(&mut self, name: &str, ty: Type, kind: FieldKind) {
        self.lookups
            .insert(name.to_string(), FieldLookup::new(ty, kind));
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
