use super::{
    app::{
        Constraint, Field, FieldKind, FieldName, FieldTy, Model, ModelId, OnDelete, PrimaryKey,
        Relation, RelationKind,
    },
    decl::{FieldDecl, ModelDecl, TypeHint},
    Name, TypeRegistry,
};
use crate::{config::DEFAULT_UPLOAD_TO, Error, Result, Value};

use std::collections::HashSet;

/// Translates declarative model descriptions into model definitions.
///
/// Translation is pure: the same declaration always yields the same model,
/// and nothing is registered anywhere. Ids in the returned model are
/// placeholders until a [`Builder`](super::Builder) assigns real ones.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    registry: &'a TypeRegistry,
    on_delete: OnDelete,
    upload_to: &'a str,
}

/// Translate `decl` using the default type registry.
pub fn translate(decl: &ModelDecl) -> Result<Model> {
    Translator::new(&TypeRegistry::default()).translate(decl)
}

impl<'a> Translator<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            on_delete: OnDelete::default(),
            upload_to: DEFAULT_UPLOAD_TO,
        }
    }

    /// Deletion behavior of generated foreign key and one-to-one fields.
    pub fn on_delete(mut self, on_delete: OnDelete) -> Self {
        self.on_delete = on_delete;
        self
    }

    /// Upload directory of file and image kinds that do not name one.
    pub fn upload_to(mut self, upload_to: &'a str) -> Self {
        self.upload_to = upload_to;
        self
    }

    pub fn translate(&self, decl: &ModelDecl) -> Result<Model> {
        tracing::debug!(model = %decl.name, fields = decl.fields.len(), "translating model");

        let mut seen = HashSet::new();
        for field in &decl.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::duplicate_field(&decl.name, &field.name));
            }
        }

        let id = ModelId::placeholder();
        let mut fields = decl
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| self.translate_field(decl, id, index, field))
            .collect::<Result<Vec<_>>>()?;

        let primary_key = primary_key(decl, &mut fields);

        Ok(Model {
            id,
            ident: decl.name.clone(),
            name: Name::new(&decl.name),
            fields,
            primary_key,
            meta: decl.meta.clone(),
        })
    }

    fn translate_field(
        &self,
        decl: &ModelDecl,
        model: ModelId,
        index: usize,
        field: &FieldDecl,
    ) -> Result<Field> {
        let (hint, nullable) = field.hint.unwrap_option();
        let mut default = field.default.clone();

        let (ty, mut kind) = match hint {
            TypeHint::Relation { kind, target } => {
                if field.options.kind.is_some() {
                    tracing::warn!(
                        model = %decl.name,
                        field = %field.name,
                        "explicit field kind ignored on relation field"
                    );
                }

                let target = match target.as_str() {
                    "Self" | "self" => decl.name.clone(),
                    // Types with a field kind of their own cannot be models
                    _ if self.registry.lookup(&TypeHint::named(target, vec![])).is_some() => {
                        return Err(Error::unsupported_type(
                            &decl.name,
                            &field.name,
                            field.hint.to_string(),
                        ));
                    }
                    _ => target.clone(),
                };

                let related_name = match (&field.options.related_name, default.take()) {
                    (Some(related_name), _) => Some(related_name.clone()),
                    (None, Some(Value::String(related_name))) => Some(related_name),
                    (None, Some(value)) => {
                        tracing::warn!(
                            model = %decl.name,
                            field = %field.name,
                            %value,
                            "non-string default ignored on relation field"
                        );
                        None
                    }
                    (None, None) => None,
                };

                let native = self.relation_kind(*kind, &target);
                let relation = Relation {
                    kind: *kind,
                    target,
                    related_name,
                    pair: None,
                    passive: false,
                };

                (FieldTy::Relation(relation), native)
            }
            _ => {
                let lookup_kind = match &field.options.kind {
                    Some(kind) => Some(kind.clone()),
                    None => self.registry.lookup(hint).map(|lookup| lookup.kind.clone()),
                };

                // Relation kinds need a target, which only relation hints carry
                let Some((ty, kind)) = lookup_kind.and_then(|kind| Some((kind.ty()?, kind)))
                else {
                    return Err(Error::unsupported_type(
                        &decl.name,
                        &field.name,
                        field.hint.to_string(),
                    ));
                };

                (FieldTy::Primitive(ty), kind)
            }
        };

        kind.fill_upload_to(self.upload_to);

        let mut constraints = vec![];

        if let Some(max_length) = field.options.max_length {
            kind.set_max_length(max_length);
            constraints.push(Constraint::max_length(max_length));
        }
        if field.options.unique {
            constraints.push(Constraint::Unique);
        }
        if field.options.blank {
            constraints.push(Constraint::Blank);
        }

        tracing::trace!(
            model = %decl.name,
            field = %field.name,
            %kind,
            nullable,
            "translated field"
        );

        Ok(Field {
            id: model.field(index),
            name: FieldName {
                app_name: field.name.clone(),
                storage_name: field.options.column.clone(),
            },
            ty,
            kind,
            nullable,
            primary_key: false,
            default,
            constraints,
        })
    }

    fn relation_kind(&self, kind: RelationKind, target: &str) -> FieldKind {
        let to = target.to_string();

        match kind {
            RelationKind::ManyToOne => FieldKind::ForeignKey {
                to,
                on_delete: self.on_delete,
            },
            RelationKind::OneToOne => FieldKind::OneToOne {
                to,
                on_delete: self.on_delete,
            },
            RelationKind::ManyToMany => FieldKind::ManyToMany { to },
            RelationKind::OneToMany => FieldKind::Reverse { to },
        }
    }
}

/// Picks the primary key: the first flagged field, else a field named `id`
/// that can hold a key, else an implicit auto id.
///
/// Flags are carried through as declared. Whether they form a valid key is
/// checked when the model joins a schema.
fn primary_key(decl: &ModelDecl, fields: &mut [Field]) -> PrimaryKey {
    let mut flagged = None;

    for (index, field) in decl.fields.iter().enumerate() {
        if field.options.primary_key {
            fields[index].primary_key = true;
            flagged.get_or_insert(index);
        }
    }

    if let Some(index) = flagged {
        return PrimaryKey::Field(index);
    }

    match fields
        .iter_mut()
        .enumerate()
        .find(|(_, field)| field.name.app_name == "id" && field.can_be_primary_key())
    {
        Some((index, field)) => {
            field.primary_key = true;
            PrimaryKey::Field(index)
        }
        None => PrimaryKey::Auto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::app::Type;

    #[test]
    fn self_target_is_rewritten() {
        let decl =
            ModelDecl::new("Person").field(FieldDecl::new("parent", "Option<ManyToOne<Self>>"));
        let model = translate(&decl).unwrap();

        let parent = &model.fields[0];
        assert!(parent.nullable);
        assert_eq!(parent.ty.expect_relation().target, "Person");
        assert_eq!(
            parent.kind,
            FieldKind::ForeignKey {
                to: "Person".to_string(),
                on_delete: OnDelete::Cascade,
            }
        );
    }

    #[test]
    fn string_default_names_reverse_accessor() {
        let decl = ModelDecl::new("Book")
            .field(FieldDecl::new("author", "ManyToOne<Author>").default("books"))
            .field(FieldDecl::new("editor", "ManyToOne<Author>").default(3));
        let model = translate(&decl).unwrap();

        let author = &model.fields[0];
        assert_eq!(author.default, None);
        assert_eq!(
            author.ty.expect_relation().related_name.as_deref(),
            Some("books")
        );

        let editor = &model.fields[1];
        assert_eq!(editor.default, None);
        assert_eq!(editor.ty.expect_relation().related_name, None);
    }

    #[test]
    fn explicit_kind_bypasses_registry() {
        let decl = ModelDecl::new("Post")
            .field(FieldDecl::new("body", "String").kind(FieldKind::Text))
            .field(FieldDecl::new("point", "(f64, f64)").kind(FieldKind::Json));
        let model = translate(&decl).unwrap();

        assert_eq!(model.fields[0].kind, FieldKind::Text);
        assert_eq!(model.fields[1].declared_type(), Type::Json);
    }

    #[test]
    fn relation_kind_override_is_unsupported() {
        let decl = ModelDecl::new("Post").field(FieldDecl::new("tags", "Tags").kind(
            FieldKind::ManyToMany {
                to: "Tag".to_string(),
            },
        ));
        let err = translate(&decl).unwrap_err();
        assert!(err.is_unsupported_type());
    }

    #[test]
    fn on_delete_flows_into_relation_kinds() {
        let registry = TypeRegistry::default();
        let decl = ModelDecl::new("Profile").field(FieldDecl::new("user", "OneToOne<User>"));
        let model = Translator::new(&registry)
            .on_delete(OnDelete::Protect)
            .translate(&decl)
            .unwrap();

        assert_eq!(
            model.fields[0].kind,
            FieldKind::OneToOne {
                to: "User".to_string(),
                on_delete: OnDelete::Protect,
            }
        );
    }

    #[test]
    fn id_fields_that_cannot_hold_a_key_stay_plain() {
        for hint in ["Option<i32>", "ManyToMany<Tag>", "OneToMany<Tag>"] {
            let decl = ModelDecl::new("User").field(FieldDecl::new("id", hint));
            let model = translate(&decl).unwrap();

            assert_eq!(model.primary_key, PrimaryKey::Auto, "{hint}");
            assert!(!model.fields[0].primary_key, "{hint}");
        }
    }

    #[test]
    fn flagged_keys_are_carried_through() {
        let decl = ModelDecl::new("Country")
            .field(FieldDecl::new("code", "String").primary_key())
            .field(FieldDecl::new("iso", "Option<String>").primary_key());
        let model = translate(&decl).unwrap();

        assert_eq!(model.primary_key, PrimaryKey::Field(0));
        assert!(model.fields.iter().all(|field| field.primary_key));
    }

    #[test]
    fn relation_targets_must_name_models() {
        for hint in [
            "ManyToOne<Option<Author>>",
            "ManyToOne<Vec<u8>>",
            "OneToOne<i32>",
            "ManyToMany<Text>",
        ] {
            let decl = ModelDecl::new("Book").field(FieldDecl::new("x", hint));
            let err = translate(&decl).unwrap_err();

            assert!(err.is_unsupported_type(), "{hint}: {err}");
            assert!(err.to_string().contains(hint), "{hint}: {err}");
        }
    }

    #[test]
    fn file_kinds_default_to_configured_upload_dir() {
        let registry = TypeRegistry::default();
        let decl = ModelDecl::new("Report")
            .field(FieldDecl::new("pdf", "String").kind(FieldKind::File { upload_to: None }))
            .field(FieldDecl::new("chart", "String").kind(FieldKind::Image {
                upload_to: Some("charts".to_string()),
            }));

        let model = translate(&decl).unwrap();
        assert_eq!(
            model.fields[0].kind,
            FieldKind::File {
                upload_to: Some("uploads".to_string())
            }
        );

        let model = Translator::new(&registry)
            .upload_to("media")
            .translate(&decl)
            .unwrap();
        assert_eq!(
            model.fields[0].native_declaration(),
            "pdf = FileField(upload_to=\"media\")"
        );
        assert_eq!(
            model.fields[1].native_declaration(),
            "chart = ImageField(upload_to=\"charts\")"
        );
    }
}
