/// How a model's rows are identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKey {
    /// An implicit auto-incrementing `id` field the target ORM adds
    Auto,

    /// The declared field at the given index
    Field(usize),
}

impl PrimaryKey {
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}
