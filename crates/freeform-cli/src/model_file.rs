use anyhow::{Context, Result};
use freeform_core::{
    schema::{
        app::FieldKind,
        decl::{FieldDecl, ModelDecl, TypeHint},
    },
    Config, Schema, Value,
};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Model declarations read from a TOML file.
///
/// ```toml
/// app_label = "library"
///
/// [config]
/// char_max_length = 120
///
/// [[models]]
/// name = "Book"
///
/// [[models.fields]]
/// name = "author"
/// type = "ManyToOne<Author>"
/// related = "books"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    /// Prefix for table names and check objects
    pub app_label: Option<String>,

    /// Overrides of the default translation settings
    #[serde(default)]
    pub config: Config,

    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelEntry {
    pub name: String,

    pub table: Option<String>,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,

    /// Type hint, written the way it would be in Rust
    #[serde(rename = "type")]
    pub ty: String,

    pub default: Option<Value>,

    pub max_length: Option<u64>,

    #[serde(default)]
    pub unique: bool,

    #[serde(default)]
    pub blank: bool,

    #[serde(default)]
    pub primary_key: bool,

    pub related: Option<String>,

    pub column: Option<String>,

    /// Native kind override, e.g. `char(100)`
    pub kind: Option<String>,
}

impl ModelFile {
    /// Load a model file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model file `{}`", path.display()))?;

        contents
            .parse()
            .with_context(|| format!("invalid model file `{}`", path.display()))
    }

    pub fn declarations(&self) -> Result<Vec<ModelDecl>> {
        self.models.iter().map(ModelEntry::declaration).collect()
    }

    /// Translates every declared model into a schema.
    pub fn build(&self) -> Result<Schema> {
        let mut builder = Schema::builder();
        builder.config(self.config.clone());

        if let Some(app_label) = &self.app_label {
            builder.app_label(app_label);
        }

        for decl in self.declarations()? {
            builder.model(decl);
        }

        Ok(builder.build()?)
    }
}

impl FromStr for ModelFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

impl ModelEntry {
    pub fn declaration(&self) -> Result<ModelDecl> {
        let mut decl = ModelDecl::new(&self.name);

        if let Some(table) = &self.table {
            decl = decl.table(table);
        }
        if self.is_abstract {
            decl = decl.set_abstract();
        }

        for field in &self.fields {
            let field = field
                .declaration()
                .with_context(|| format!("in field `{}` of model `{}`", field.name, self.name))?;
            decl = decl.field(field);
        }

        Ok(decl)
    }
}

impl FieldEntry {
    pub fn declaration(&self) -> Result<FieldDecl> {
        let hint: TypeHint = self.ty.parse()?;
        let mut decl = FieldDecl::new(&self.name, hint);

        decl.default = self.default.clone();
        decl.options.max_length = self.max_length;
        decl.options.unique = self.unique;
        decl.options.blank = self.blank;
        decl.options.primary_key = self.primary_key;
        decl.options.related_name = self.related.clone();
        decl.options.column = self.column.clone();
        decl.options.kind = self
            .kind
            .as_deref()
            .map(str::parse::<FieldKind>)
            .transpose()?;

        Ok(decl)
    }
}
