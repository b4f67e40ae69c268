use super::Schema;
use std::fmt;

/// A non-fatal problem found in a built schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Stable identifier, e.g. `freeform.W001`
    pub id: &'static str,

    pub message: String,

    /// How to fix it
    pub hint: String,

    /// The offending object, `app_label.Model.field`
    pub obj: String,
}

impl Schema {
    /// Reports relations declared on one side only.
    ///
    /// The target ORM does not require the reverse side to be declared, but
    /// without it the reverse accessor is untyped. Relations pointing at
    /// models outside the schema, or at abstract models, are not reported.
    pub fn check(&self) -> Vec<Warning> {
        let mut warnings = vec![];

        for (key, field) in self.relations.unresolved() {
            let Some(target) = self.model_by_name(&key.model_b) else {
                continue;
            };

            if target.meta.is_abstract {
                continue;
            }

            let mut obj = vec![];
            if let Some(app_label) = &self.app_label {
                obj.push(app_label.as_str());
            }
            obj.push(&key.model_a);
            obj.push(&self.field(field).name.app_name);

            warnings.push(Warning {
                id: "freeform.W001",
                message: "missing explicit reverse relationship for this relation; \
                          the target ORM does not require it, but it helps with typing"
                    .to_string(),
                hint: format!(
                    "Expecting equivalent in {} model of '{}: {}<{}>' with related = \"{}\"",
                    key.model_b,
                    key.field_b,
                    key.kind.flip(),
                    key.model_a,
                    key.field_a,
                ),
                obj: obj.join("."),
            });
        }

        warnings
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({}) {}\n\tHINT: {}", self.obj, self.id, self.message, self.hint)
    }
}
