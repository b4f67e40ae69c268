use super::app::{FieldId, RelationKind};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Tracks declared relations so each one can be paired with the field
/// declaring its reverse side.
#[derive(Debug, Default)]
pub(crate) struct Relations {
    entries: IndexMap<RelationKey, Entry>,
}

/// Identifies one side of a relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RelationKey {
    pub(crate) kind: RelationKind,

    /// The declaring model
    pub(crate) model_a: String,

    /// The target model
    pub(crate) model_b: String,

    /// The declaring field
    pub(crate) field_a: String,

    /// The accessor expected on the target model
    pub(crate) field_b: String,
}

#[derive(Debug)]
struct Entry {
    field: FieldId,
    resolved: bool,
}

impl RelationKey {
    /// The key the target model's field must register to pair with this one.
    pub(crate) fn reverse(&self) -> Self {
        Self {
            kind: self.kind.flip(),
            model_a: self.model_b.clone(),
            model_b: self.model_a.clone(),
            field_a: self.field_b.clone(),
            field_b: self.field_a.clone(),
        }
    }
}

impl Relations {
    /// Registers one side of a relation, returning the field declaring the
    /// reverse side if it is already known.
    ///
    /// A key that is its own reverse (a symmetric self relation) pairs with
    /// itself.
    pub(crate) fn register(&mut self, key: RelationKey, field: FieldId) -> Result<Option<FieldId>> {
        let reverse = key.reverse();

        tracing::debug!(
            kind = %key.kind,
            model = %key.model_a,
            field = %key.field_a,
            target = %key.model_b,
            accessor = %key.field_b,
            "registering relation"
        );

        self.entries.insert(
            key,
            Entry {
                field,
                resolved: false,
            },
        );

        let Some(entry) = self.entries.get_mut(&reverse) else {
            return Ok(None);
        };

        if entry.resolved {
            return Err(Error::invalid_schema(format!(
                "multiple possible reverse relationships registered for `{}.{}`",
                reverse.model_a, reverse.field_a
            )));
        }

        entry.resolved = true;
        let pair = entry.field;

        if let Some(entry) = self.entries.get_mut(&reverse.reverse()) {
            entry.resolved = true;
        }

        Ok(Some(pair))
    }

    /// Relations whose reverse side was never registered.
    pub(crate) fn unresolved(&self) -> impl Iterator<Item = (&RelationKey, FieldId)> + '_ {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.resolved)
            .map(|(key, entry)| (key, entry.field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::app::ModelId;

    fn key(kind: RelationKind, a: &str, b: &str, field_a: &str, field_b: &str) -> RelationKey {
        RelationKey {
            kind,
            model_a: a.to_string(),
            model_b: b.to_string(),
            field_a: field_a.to_string(),
            field_b: field_b.to_string(),
        }
    }

    #[test]
    fn reverse_pairs_with_forward() {
        let mut relations = Relations::default();
        let author = ModelId(0).field(1);
        let books = ModelId(1).field(2);

        let forward = key(RelationKind::ManyToOne, "Book", "Author", "author", "books");
        assert_eq!(relations.register(forward.clone(), author).unwrap(), None);
        assert_eq!(relations.unresolved().count(), 1);

        let reverse = forward.reverse();
        assert_eq!(reverse.kind, RelationKind::OneToMany);
        assert_eq!(relations.register(reverse, books).unwrap(), Some(author));
        assert_eq!(relations.unresolved().count(), 0);
    }

    #[test]
    fn symmetric_self_relation_pairs_with_itself() {
        let mut relations = Relations::default();
        let spouse = ModelId(0).field(0);

        let key = key(RelationKind::OneToOne, "Person", "Person", "spouse", "spouse");
        assert_eq!(relations.register(key, spouse).unwrap(), Some(spouse));
        assert_eq!(relations.unresolved().count(), 0);
    }

    #[test]
    fn second_reverse_is_ambiguous() {
        let mut relations = Relations::default();
        let forward = key(RelationKind::OneToOne, "User", "Profile", "profile", "user");

        relations.register(forward.clone(), ModelId(0).field(0)).unwrap();
        relations
            .register(forward.reverse(), ModelId(1).field(0))
            .unwrap();

        let err = relations
            .register(forward.reverse(), ModelId(1).field(1))
            .unwrap_err();
        assert!(err.is_invalid_schema());
    }
}
