use super::{
    app::{FieldId, Model, ModelId, Relation, RelationKind},
    decl::ModelDecl,
    relations::{RelationKey, Relations},
    FieldLookup, Schema, Translator, TypeRegistry,
};
use crate::{Config, Error, Result};

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    /// Registrations applied on top of the config-seeded type registry
    types: Vec<(String, FieldLookup)>,

    /// If set, prefixes table names and check objects
    app_label: Option<String>,

    models: Vec<ModelDecl>,
}

/// Used to track state while pairing relations
struct BuildSchema {
    models: IndexMap<ModelId, Model>,
    relations: Relations,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Maps an additional type name to a field lookup.
    pub fn register_type(&mut self, name: impl Into<String>, lookup: FieldLookup) -> &mut Self {
        self.types.push((name.into(), lookup));
        self
    }

    pub fn app_label(&mut self, app_label: impl Into<String>) -> &mut Self {
        self.app_label = Some(app_label.into());
        self
    }

    pub fn model(&mut self, decl: ModelDecl) -> &mut Self {
        self.models.push(decl);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut registry = TypeRegistry::from_config(&self.config);
        for (name, lookup) in &self.types {
            registry.register(name.clone(), lookup.clone());
        }

        let translator = Translator::new(&registry)
            .on_delete(self.config.on_delete)
            .upload_to(&self.config.upload_to);

        let mut builder = BuildSchema {
            models: IndexMap::new(),
            relations: Relations::default(),
        };

        for (index, decl) in self.models.iter().enumerate() {
            if builder.models.values().any(|model| model.ident == decl.name) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is registered more than once",
                    decl.name
                )));
            }

            let id = ModelId(index);
            let mut model = translator.translate(decl)?;
            verify_primary_key(&model)?;
            model.assign_id(id);

            builder.models.insert(id, model);
        }

        let ids = builder.models.keys().copied().collect::<Vec<_>>();
        for id in ids {
            builder.register_relations(id)?;
        }

        tracing::debug!(
            models = builder.models.len(),
            app_label = ?self.app_label,
            "built schema"
        );

        Ok(Schema {
            models: builder.models,
            app_label: self.app_label.clone(),
            relations: builder.relations,
        })
    }
}

/// Flagged primary keys must be unique within the model and able to hold a
/// key.
fn verify_primary_key(model: &Model) -> Result<()> {
    let flagged = model
        .fields
        .iter()
        .filter(|field| field.primary_key)
        .collect::<Vec<_>>();

    if flagged.len() > 1 {
        let names = flagged
            .iter()
            .map(|field| format!("`{}`", field.name.app_name))
            .collect::<Vec<_>>()
            .join(", ");

        return Err(Error::invalid_schema(format!(
            "model `{}` flags more than one primary key field: {names}",
            model.ident
        )));
    }

    let Some(field) = flagged.first() else {
        return Ok(());
    };

    if field.nullable {
        return Err(Error::invalid_schema(format!(
            "primary key field `{}` of model `{}` cannot be nullable",
            field.name.app_name, model.ident
        )));
    }
    if let Some(relation) = field.ty.as_relation() {
        if relation.kind.is_to_many() {
            return Err(Error::invalid_schema(format!(
                "primary key field `{}` of model `{}` cannot be a {} relation",
                field.name.app_name, model.ident, relation.kind
            )));
        }
    }

    Ok(())
}

impl BuildSchema {
    fn register_relations(&mut self, id: ModelId) -> Result<()> {
        let model = &self.models[&id];

        // Abstract models only lend their fields to others
        if model.meta.is_abstract {
            return Ok(());
        }

        let keys = model
            .fields
            .iter()
            .filter_map(|field| {
                let relation = field.ty.as_relation()?;

                let key = RelationKey {
                    kind: relation.kind,
                    model_a: model.ident.clone(),
                    model_b: relation.target.clone(),
                    field_a: field.name.app_name.clone(),
                    field_b: relation.reverse_name(&model.ident),
                };

                Some((key, field.id))
            })
            .collect::<Vec<_>>();

        for (key, field_id) in keys {
            let kind = key.kind;

            let Some(pair) = self.relations.register(key, field_id)? else {
                continue;
            };

            // The side registered first owns the storage of a symmetric pair
            let passive = pair != field_id
                && matches!(kind, RelationKind::OneToOne | RelationKind::ManyToMany);

            if let Some(relation) = self.relation_mut(field_id) {
                relation.pair = Some(pair);
                relation.passive = passive;
            }
            if let Some(relation) = self.relation_mut(pair) {
                relation.pair = Some(field_id);
            }
        }

        Ok(())
    }

    fn relation_mut(&mut self, id: FieldId) -> Option<&mut Relation> {
        let field = self.models.get_mut(&id.model)?.fields.get_mut(id.index)?;
        field.ty.as_relation_mut()
    }
}
