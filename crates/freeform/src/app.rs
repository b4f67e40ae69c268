//! Registration of model types into a checked schema.

use crate::{Config, Model, Result};

use freeform_core::schema::{self, decl::ModelDecl, FieldLookup, Warning};

/// A set of registered models.
#[derive(Debug)]
pub struct App {
    schema: schema::Schema,
}

#[derive(Debug, Default)]
pub struct Builder {
    core: schema::Builder,
}

impl App {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &schema::Schema {
        &self.schema
    }

    /// Runs the schema checks, logging every warning.
    pub fn check(&self) -> Vec<Warning> {
        let warnings = self.schema.check();

        for warning in &warnings {
            tracing::warn!(
                id = warning.id,
                obj = %warning.obj,
                hint = %warning.hint,
                "{}",
                warning.message
            );
        }

        warnings
    }
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.core.model(T::declaration());
        self
    }

    /// Registers a model described by hand rather than by a type.
    pub fn declaration(&mut self, decl: ModelDecl) -> &mut Self {
        self.core.model(decl);
        self
    }

    pub fn app_label(&mut self, app_label: impl Into<String>) -> &mut Self {
        self.core.app_label(app_label);
        self
    }

    pub fn config(&mut self, config: Config) -> &mut Self {
        self.core.config(config);
        self
    }

    pub fn register_type(&mut self, name: impl Into<String>, lookup: FieldLookup) -> &mut Self {
        self.core.register_type(name, lookup);
        self
    }

    pub fn build(&self) -> Result<App> {
        let schema = self.core.build()?;
        Ok(App { schema })
    }
}
