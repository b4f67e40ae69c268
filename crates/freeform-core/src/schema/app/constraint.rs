/// Validation carried by a field descriptor alongside its native kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Values may hold at most `max` characters
    MaxLength { max: u64 },

    /// No two rows may share a value for the field
    Unique,

    /// Empty values are accepted by input validation
    Blank,
}

impl Constraint {
    pub fn max_length(max: u64) -> Self {
        Constraint::MaxLength { max }
    }
}
