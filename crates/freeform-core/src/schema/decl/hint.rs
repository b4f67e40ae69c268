use crate::schema::app::RelationKind;
use std::{fmt, str::FromStr};

/// The type annotation of a declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHint {
    /// A named type, possibly generic: `String`, `Vec<u8>`
    Named { name: String, args: Vec<TypeHint> },

    /// `Option<T>`; the field is nullable
    Option(Box<TypeHint>),

    /// `ManyToOne<Author>` and friends
    Relation { kind: RelationKind, target: String },

    /// Anything that is not a type path (tuples, arrays, references). Opaque
    /// hints never resolve to a field kind.
    Opaque(String),
}

impl TypeHint {
    /// Builds a hint from a type name and its generic arguments, recognizing
    /// `Option` and the relation wrappers.
    ///
    /// A wrapper only becomes a relation when its argument is a bare type
    /// name. Anything else stays a named hint, which no field kind maps to.
    pub fn named(name: impl Into<String>, mut args: Vec<TypeHint>) -> Self {
        let name = name.into();

        if args.len() == 1 {
            if name == "Option" {
                return Self::Option(Box::new(args.remove(0)));
            }

            if let (Some(kind), Self::Named { name: target, args: target_args }) =
                (RelationKind::from_wrapper(&name), &args[0])
            {
                if target_args.is_empty() {
                    return Self::Relation {
                        kind,
                        target: target.clone(),
                    };
                }
            }
        }

        Self::Named { name, args }
    }

    pub fn opaque(src: impl Into<String>) -> Self {
        Self::Opaque(src.into())
    }

    /// Strips any number of `Option` layers, returning the inner hint and
    /// whether a layer was found.
    pub fn unwrap_option(&self) -> (&TypeHint, bool) {
        let mut hint = self;
        let mut nullable = false;

        while let Self::Option(inner) = hint {
            hint = inner;
            nullable = true;
        }

        (hint, nullable)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } => {
                f.write_str(name)?;

                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }

                Ok(())
            }
            Self::Option(inner) => write!(f, "Option<{inner}>"),
            Self::Relation { kind, target } => write!(f, "{kind}<{target}>"),
            Self::Opaque(src) => f.write_str(src),
        }
    }
}

/// Parses hints such as `Option<chrono::NaiveDate>` or `ManyToOne<Author>`.
///
/// Path qualifiers are dropped: only the last segment names the type. Input
/// that does not start like a path parses as [`TypeHint::Opaque`].
impl FromStr for TypeHint {
    type Err = crate::Error;

    fn from_str(src: &str) -> crate::Result<Self> {
        let src = src.trim();

        if !src.starts_with(|c: char| c.is_alphabetic() || c == '_') {
            return Ok(Self::opaque(src));
        }

        let mut parser = Parser { src, pos: 0 };
        let hint = parser.hint()?;

        parser.skip_whitespace();
        if parser.pos != src.len() {
            crate::bail!(
                "unexpected `{}` after type hint `{hint}`",
                &src[parser.pos..]
            );
        }

        Ok(hint)
    }
}

impl From<&str> for TypeHint {
    fn from(src: &str) -> Self {
        src.parse().unwrap_or_else(|_| Self::opaque(src.trim()))
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn hint(&mut self) -> crate::Result<TypeHint> {
        let name = self.path()?;
        let mut args = vec![];

        self.skip_whitespace();
        if self.eat('<') {
            loop {
                args.push(self.hint()?);

                self.skip_whitespace();
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                crate::bail!("expected `,` or `>` in type hint `{}`", self.src);
            }
        }

        Ok(TypeHint::named(name, args))
    }

    /// Parses `a::b::C`, returning `C`.
    fn path(&mut self) -> crate::Result<String> {
        let mut segment = self.ident()?;

        loop {
            self.skip_whitespace();
            if !self.src[self.pos..].starts_with("::") {
                return Ok(segment);
            }
            self.pos += 2;
            self.skip_whitespace();
            segment = self.ident()?;
        }
    }

    fn ident(&mut self) -> crate::Result<String> {
        self.skip_whitespace();

        let rest = &self.src[self.pos..];
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());

        if len == 0 || rest.starts_with(|c: char| c.is_ascii_digit()) {
            crate::bail!("expected identifier in type hint `{}`", self.src);
        }

        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn eat(&mut self, c: char) -> bool {
        if self.src[self.pos..].starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.src[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}
