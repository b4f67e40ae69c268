use super::Error;

/// Error when a model declares two fields with the same name.
#[derive(Debug)]
pub(super) struct DuplicateFieldError {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicateFieldError {}

impl core::fmt::Display for DuplicateFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` declares field `{}` more than once",
            self.model, self.field
        )
    }
}

impl Error {
    /// Creates a duplicate field error.
    pub fn duplicate_field(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateField(DuplicateFieldError {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate field error.
    pub fn is_duplicate_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateField(_))
    }
}
