use console::style;
use freeform_core::schema::Warning;
use freeform_core::Schema;
use std::fmt::Write;

/// Lists each concrete model with its table and native field declarations.
pub(crate) fn render_schema(schema: &Schema, all: bool) -> String {
    let mut out = String::new();

    for model in schema.models() {
        if model.meta.is_abstract {
            let _ = writeln!(
                out,
                "{} {}",
                style(&model.ident).bold(),
                style("(abstract)").dim()
            );
        } else {
            let _ = writeln!(
                out,
                "{} {}",
                style(&model.ident).bold(),
                style(format!("[{}]", schema.table_name(model))).dim()
            );
        }

        if model.primary_key.is_auto() {
            let _ = writeln!(out, "  {}", style("id = BigAutoField(primary_key=true)").dim());
        }

        for field in &model.fields {
            if field.is_native() {
                let _ = writeln!(out, "  {}", field.native_declaration());
            } else if all {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    style(field.native_declaration()).dim(),
                    style("(not stored)").dim()
                );
            }
        }

        out.push('\n');
    }

    out
}

pub(crate) fn render_warnings(warnings: &[Warning]) -> String {
    let mut out = String::new();

    for warning in warnings {
        let _ = writeln!(
            out,
            "{}: ({}) {}",
            style(&warning.obj).bold(),
            style(warning.id).yellow(),
            warning.message
        );
        let _ = writeln!(out, "\t{} {}", style("HINT:").cyan(), warning.hint);
    }

    let summary = match warnings.len() {
        0 => "System check identified no issues.".to_string(),
        1 => "System check identified 1 issue.".to_string(),
        n => format!("System check identified {n} issues."),
    };
    let _ = writeln!(out, "{summary}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use freeform_core::schema::decl::{FieldDecl, ModelDecl};
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::builder()
            .app_label("library")
            .model(ModelDecl::new("Author").field(FieldDecl::new("name", "String")))
            .model(
                ModelDecl::new("Book")
                    .field(FieldDecl::new("isbn", "String").max_length(13).primary_key())
                    .field(FieldDecl::new("author", "ManyToOne<Author>")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn render_plain_schema() {
        console::set_colors_enabled(false);

        assert_eq!(
            render_schema(&schema(), false),
            "Author [library_author]\n  \
             id = BigAutoField(primary_key=true)\n  \
             name = CharField(max_length=255)\n\
             \n\
             Book [library_book]\n  \
             isbn = CharField(max_length=13, primary_key=true)\n  \
             author = ForeignKey(to=\"Author\", on_delete=CASCADE)\n\
             \n"
        );
    }

    #[test]
    fn render_plain_warnings() {
        console::set_colors_enabled(false);

        let warnings = schema().check();
        assert_eq!(
            render_warnings(&warnings),
            "library.Book.author: (freeform.W001) missing explicit reverse relationship for \
             this relation; the target ORM does not require it, but it helps with typing\n\
             \tHINT: Expecting equivalent in Author model of 'book_set: OneToMany<Book>' \
             with related = \"author\"\n\
             System check identified 1 issue.\n"
        );

        assert_eq!(render_warnings(&[]), "System check identified no issues.\n");
    }
}
