use crate::schema::app::OnDelete;

/// Upload directory used when neither the config nor a field names one.
pub const DEFAULT_UPLOAD_TO: &str = "uploads";

/// Settings that seed the default type registry and relation field kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// `max_length` of the char field generated for `String`
    pub char_max_length: u64,

    /// `max_length` of slug fields
    pub slug_max_length: u64,

    /// `max_length` of email fields
    pub email_max_length: u64,

    /// Upload directory for file and image fields
    pub upload_to: String,

    /// Total digits stored by decimal fields
    pub decimal_max_digits: u8,

    /// Digits after the decimal point stored by decimal fields
    pub decimal_places: u8,

    /// Deletion behavior of foreign key and one-to-one fields
    pub on_delete: OnDelete,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            char_max_length: 255,
            slug_max_length: 255,
            email_max_length: 255,
            upload_to: DEFAULT_UPLOAD_TO.to_string(),
            decimal_max_digits: 10,
            decimal_places: 2,
            on_delete: OnDelete::Cascade,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn char_max_length(mut self, max_length: u64) -> Self {
        self.char_max_length = max_length;
        self
    }

    pub fn slug_max_length(mut self, max_length: u64) -> Self {
        self.slug_max_length = max_length;
        self
    }

    pub fn email_max_length(mut self, max_length: u64) -> Self {
        self.email_max_length = max_length;
        self
    }

    pub fn upload_to(mut self, path: impl Into<String>) -> Self {
        self.upload_to = path.into();
        self
    }

    /// Set the precision used for decimal fields
    pub fn decimal(mut self, max_digits: u8, decimal_places: u8) -> Self {
        self.decimal_max_digits = max_digits;
        self.decimal_places = decimal_places;
        self
    }

    pub fn on_delete(mut self, on_delete: OnDelete) -> Self {
        self.on_delete = on_delete;
        self
    }
}
