use std_util::str;

/// Model name broken into lowercase words, used to derive storage names.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(ident: &str) -> Self {
        let parts = str::snake_case(ident)
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Default table, prefixed by the app label when there is one.
    pub fn table_name(&self, app_label: Option<&str>) -> String {
        match app_label {
            Some(label) => format!("{label}_{}", self.snake_case()),
            None => self.snake_case(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Name;

    #[test]
    fn model_names() {
        let name = Name::new("ExampleTypedModel");
        assert_eq!(name.parts, ["example", "typed", "model"]);
        assert_eq!(name.table_name(None), "example_typed_model");
        assert_eq!(name.table_name(Some("shop")), "shop_example_typed_model");
    }

    #[test]
    fn acronyms_split_into_words() {
        assert_eq!(Name::new("HTTPRequest").snake_case(), "http_request");
    }
}
