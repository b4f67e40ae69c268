use super::Error;

/// Error when a field's type hint cannot be mapped to any native field kind.
///
/// Raised by the translator when the hint is neither a relation, nor
/// registered in the type registry, and the field does not carry an explicit
/// `kind` override.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    model: Box<str>,
    field: Box<str>,
    hint: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` of model `{}` has type hint `{}`, \
             but there is no field kind registered for that type",
            self.field, self.model, self.hint
        )
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(
        model: impl Into<String>,
        field: impl Into<String>,
        hint: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            model: model.into().into(),
            field: field.into().into(),
            hint: hint.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
