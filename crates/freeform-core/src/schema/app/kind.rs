use super::Type;
use std::{fmt, str::FromStr};

/// The native field type the target ORM registers for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Auto-incrementing 64-bit primary key
    AutoId,
    Char {
        max_length: u64,
    },
    Text,
    Slug {
        max_length: u64,
    },
    Email {
        max_length: u64,
    },
    Integer,
    BigInteger,
    Float,
    Decimal {
        max_digits: u8,
        decimal_places: u8,
    },
    Boolean,
    DateTime,
    Date,
    Time,
    Duration,
    Uuid,
    Json,
    Binary,
    /// `upload_to` left unset is filled in from the translator's config
    File {
        upload_to: Option<String>,
    },
    Image {
        upload_to: Option<String>,
    },
    ForeignKey {
        to: String,
        on_delete: OnDelete,
    },
    OneToOne {
        to: String,
        on_delete: OnDelete,
    },
    ManyToMany {
        to: String,
    },
    /// Stand-in for the many side of a foreign key. Owns no storage.
    Reverse {
        to: String,
    },
}

/// What happens to rows referencing a deleted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OnDelete {
    #[default]
    Cascade,
    Protect,
    Restrict,
    SetNull,
    DoNothing,
}

impl FieldKind {
    /// The semantic type a field of this kind stores, or `None` for relation
    /// kinds.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::AutoId | Self::BigInteger => Type::BigInteger,
            Self::Char { .. } | Self::Text | Self::Slug { .. } | Self::Email { .. } => Type::Text,
            Self::Integer => Type::Integer,
            Self::Float => Type::Float,
            Self::Decimal { .. } => Type::Decimal,
            Self::Boolean => Type::Boolean,
            Self::DateTime => Type::DateTime,
            Self::Date => Type::Date,
            Self::Time => Type::Time,
            Self::Duration => Type::Duration,
            Self::Uuid => Type::Uuid,
            Self::Json => Type::Json,
            Self::Binary => Type::Binary,
            Self::File { .. } | Self::Image { .. } => Type::File,
            Self::ForeignKey { .. }
            | Self::OneToOne { .. }
            | Self::ManyToMany { .. }
            | Self::Reverse { .. } => return None,
        })
    }

    pub fn max_length(&self) -> Option<u64> {
        match self {
            Self::Char { max_length } | Self::Slug { max_length } | Self::Email { max_length } => {
                Some(*max_length)
            }
            _ => None,
        }
    }

    /// Sets the upload directory of file kinds that do not name one.
    pub(crate) fn fill_upload_to(&mut self, path: &str) {
        if let Self::File { upload_to } | Self::Image { upload_to } = self {
            upload_to.get_or_insert_with(|| path.to_string());
        }
    }

    /// Replaces the native max length, if this kind carries one.
    pub(crate) fn set_max_length(&mut self, max: u64) {
        if let Self::Char { max_length } | Self::Slug { max_length } | Self::Email { max_length } =
            self
        {
            *max_length = max;
        }
    }

    pub(crate) fn native_name(&self) -> &'static str {
        match self {
            Self::AutoId => "BigAutoField",
            Self::Char { .. } => "CharField",
            Self::Text => "TextField",
            Self::Slug { .. } => "SlugField",
            Self::Email { .. } => "EmailField",
            Self::Integer => "IntegerField",
            Self::BigInteger => "BigIntegerField",
            Self::Float => "FloatField",
            Self::Decimal { .. } => "DecimalField",
            Self::Boolean => "BooleanField",
            Self::DateTime => "DateTimeField",
            Self::Date => "DateField",
            Self::Time => "TimeField",
            Self::Duration => "DurationField",
            Self::Uuid => "UUIDField",
            Self::Json => "JSONField",
            Self::Binary => "BinaryField",
            Self::File { .. } => "FileField",
            Self::Image { .. } => "ImageField",
            Self::ForeignKey { .. } => "ForeignKey",
            Self::OneToOne { .. } => "OneToOneField",
            Self::ManyToMany { .. } => "ManyToManyField",
            Self::Reverse { .. } => "ReverseRelation",
        }
    }

    /// Keyword arguments rendered after the kind name.
    pub(crate) fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Char { max_length } | Self::Slug { max_length } | Self::Email { max_length } => {
                vec![("max_length", max_length.to_string())]
            }
            Self::Decimal {
                max_digits,
                decimal_places,
            } => vec![
                ("max_digits", max_digits.to_string()),
                ("decimal_places", decimal_places.to_string()),
            ],
            Self::File { upload_to } | Self::Image { upload_to } => upload_to
                .iter()
                .map(|path| ("upload_to", format!("{path:?}")))
                .collect(),
            Self::ForeignKey { to, on_delete } | Self::OneToOne { to, on_delete } => vec![
                ("to", format!("{to:?}")),
                ("on_delete", on_delete.to_string()),
            ],
            Self::ManyToMany { to } | Self::Reverse { to } => vec![("to", format!("{to:?}"))],
            _ => vec![],
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.native_name())?;

        for (i, (key, value)) in self.args().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }

        f.write_str(")")
    }
}

/// Parses the compact kind syntax shared with the derive macro's
/// `#[field(kind = ...)]` attribute, e.g. `char(100)`, `text` or
/// `decimal(12, 4)`. Relation kinds cannot be spelled this way.
impl FromStr for FieldKind {
    type Err = crate::Error;

    fn from_str(src: &str) -> crate::Result<Self> {
        let src = src.trim();
        let (name, args) = match src.split_once('(') {
            Some((name, rest)) => {
                let Some(args) = rest.trim_end().strip_suffix(')') else {
                    crate::bail!("unterminated argument list in field kind `{src}`");
                };
                let args = args
                    .split(',')
                    .map(str::trim)
                    .filter(|arg| !arg.is_empty())
                    .collect::<Vec<_>>();
                (name.trim(), args)
            }
            None => (src, vec![]),
        };

        let int = |index: usize| -> crate::Result<u64> {
            let Some(arg) = args.get(index) else {
                crate::bail!("field kind `{name}` expects argument #{}", index + 1);
            };
            arg.parse()
                .map_err(|_| crate::err!("field kind `{name}` expects an integer, got `{arg}`"))
        };
        let digits = |index: usize| -> crate::Result<u8> {
            let value = int(index)?;
            u8::try_from(value)
                .map_err(|_| crate::err!("field kind `{name}` argument {value} is out of range"))
        };
        let path = |index: usize| -> Option<String> {
            args.get(index)
                .map(|arg| arg.trim_matches('"').to_string())
        };

        let expected_args = match name {
            "char" | "slug" | "email" => 1,
            "decimal" => 2,
            "file" | "image" => args.len().min(1),
            "auto" | "text" | "integer" | "big_integer" | "float" | "boolean" | "datetime"
            | "date" | "time" | "duration" | "uuid" | "json" | "binary" => 0,
            _ => crate::bail!("unknown field kind `{name}`"),
        };

        if args.len() != expected_args {
            crate::bail!(
                "field kind `{name}` takes {expected_args} argument(s), got {}",
                args.len()
            );
        }

        Ok(match name {
            "auto" => Self::AutoId,
            "char" => Self::Char {
                max_length: int(0)?,
            },
            "text" => Self::Text,
            "slug" => Self::Slug {
                max_length: int(0)?,
            },
            "email" => Self::Email {
                max_length: int(0)?,
            },
            "integer" => Self::Integer,
            "big_integer" => Self::BigInteger,
            "float" => Self::Float,
            "decimal" => Self::Decimal {
                max_digits: digits(0)?,
                decimal_places: digits(1)?,
            },
            "boolean" => Self::Boolean,
            "datetime" => Self::DateTime,
            "date" => Self::Date,
            "time" => Self::Time,
            "duration" => Self::Duration,
            "uuid" => Self::Uuid,
            "json" => Self::Json,
            "binary" => Self::Binary,
            "file" => Self::File { upload_to: path(0) },
            "image" => Self::Image { upload_to: path(0) },
            _ => crate::bail!("unknown field kind `{name}`"),
        })
    }
}

impl fmt::Display for OnDelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cascade => "CASCADE",
            Self::Protect => "PROTECT",
            Self::Restrict => "RESTRICT",
            Self::SetNull => "SET_NULL",
            Self::DoNothing => "DO_NOTHING",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_native_kinds() {
        assert_eq!(
            FieldKind::Char { max_length: 255 }.to_string(),
            "CharField(max_length=255)"
        );
        assert_eq!(FieldKind::Integer.to_string(), "IntegerField()");
        assert_eq!(
            FieldKind::ForeignKey {
                to: "Author".to_string(),
                on_delete: OnDelete::Cascade,
            }
            .to_string(),
            "ForeignKey(to=\"Author\", on_delete=CASCADE)"
        );
    }

    #[test]
    fn parse_compact_syntax() {
        assert_eq!(
            "char(100)".parse::<FieldKind>().unwrap(),
            FieldKind::Char { max_length: 100 }
        );
        assert_eq!(
            " decimal(12, 4) ".parse::<FieldKind>().unwrap(),
            FieldKind::Decimal {
                max_digits: 12,
                decimal_places: 4
            }
        );
        assert_eq!(
            "image(\"avatars\")".parse::<FieldKind>().unwrap(),
            FieldKind::Image {
                upload_to: Some("avatars".to_string())
            }
        );
        assert_eq!(
            "file".parse::<FieldKind>().unwrap(),
            FieldKind::File { upload_to: None }
        );
        assert_eq!("text".parse::<FieldKind>().unwrap(), FieldKind::Text);
    }

    #[test]
    fn parse_rejects_bad_kinds() {
        assert!("char".parse::<FieldKind>().is_err());
        assert!("text(3)".parse::<FieldKind>().is_err());
        assert!("decimal(1000, 2)".parse::<FieldKind>().is_err());
        assert!("foreign_key".parse::<FieldKind>().is_err());
        assert!("char(10".parse::<FieldKind>().is_err());
    }

    #[test]
    fn relation_kinds_have_no_primitive_type() {
        assert_eq!(FieldKind::Text.ty(), Some(Type::Text));
        assert_eq!(
            FieldKind::ManyToMany {
                to: "Tag".to_string()
            }
            .ty(),
            None
        );
    }
}
