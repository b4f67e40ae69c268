//! String-backed field types that select a specific native field kind.
//!
//! A `String` field becomes a bounded char field. Wrapping the value in one
//! of these types asks for a text, slug, email, file or image field instead.

use std::{fmt, ops::Deref};

macro_rules! string_fields {
    ( $( $(#[$attr:meta])* $name:ident; )* ) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(pub String);

            impl $name {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl Deref for $name {
                type Target = str;

                fn deref(&self) -> &str {
                    &self.0
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_fields! {
    /// Unbounded text.
    Text;

    /// A short label made of letters, numbers, underscores or hyphens.
    Slug;

    /// An email address.
    Email;

    /// Path of an uploaded file, relative to the upload directory.
    File;

    /// Path of an uploaded image, relative to the upload directory.
    Image;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_like() {
        let slug = Slug::from("hello-world");
        assert_eq!(slug.len(), 11);
        assert_eq!(slug.to_string(), "hello-world");
        assert_eq!(slug.into_inner(), "hello-world");
        assert_eq!(&*Email::new("a@example.com"), "a@example.com");
    }
}
