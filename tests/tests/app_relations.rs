use freeform::schema::app::{FieldKind, OnDelete, Type};
use freeform::schema::decl::{FieldDecl, ModelDecl};
use freeform::schema::FieldLookup;
use freeform::{App, Config, ManyToMany, ManyToOne, Model, OneToMany, OneToOne};
use pretty_assertions::assert_eq;
use tests::*;

#[allow(dead_code)]
#[derive(Model)]
struct Author {
    name: String,

    #[field(related = "author")]
    books: OneToMany<Book>,
}

#[allow(dead_code)]
#[derive(Model)]
struct Book {
    title: String,

    #[field(related = "books")]
    author: ManyToOne<Author>,

    tags: ManyToMany<Tag>,
}

#[allow(dead_code)]
#[derive(Model)]
struct Tag {
    label: String,

    #[field(related = "tags")]
    book_set: ManyToMany<Book>,
}

#[allow(dead_code)]
#[derive(Model)]
struct User {
    email: freeform::Email,
    profile: Option<OneToOne<Profile>>,
}

#[allow(dead_code)]
#[derive(Model)]
struct Profile {
    #[field(primary_key, related = "account")]
    user: OneToOne<User>,
    bio: freeform::Text,
}

#[test]
fn paired_relations() {
    let app = assert_ok!(App::builder()
        .app_label("library")
        .register::<Author>()
        .register::<Book>()
        .register::<Tag>()
        .build());

    assert!(app.check().is_empty());

    let schema = app.schema();
    let book = schema.model_by_name("Book").unwrap();
    let tag = schema.model_by_name("Tag").unwrap();

    // The many-to-many is stored once, on the side registered first
    assert!(book.field_by_name("tags").unwrap().is_native());
    assert!(!tag.field_by_name("book_set").unwrap().is_native());

    let author = schema.model_by_name("Author").unwrap();
    assert_eq!(
        author
            .native_fields()
            .map(|field| field.name.app_name.as_str())
            .collect::<Vec<_>>(),
        ["name"]
    );
    assert_eq!(schema.table_name(author), "library_author");
}

#[test]
fn one_sided_relations_warn() {
    let app = assert_ok!(App::builder()
        .app_label("accounts")
        .register::<User>()
        .register::<Profile>()
        .build());

    let warnings = app.check();
    let objects = warnings
        .iter()
        .map(|warning| warning.obj.as_str())
        .collect::<Vec<_>>();

    // `Profile.user` names `User.account` as its reverse, which does not exist
    assert_eq!(objects, ["accounts.User.profile", "accounts.Profile.user"]);
    assert_eq!(
        warnings[0].hint,
        "Expecting equivalent in Profile model of 'user: OneToOne<User>' with related = \"profile\""
    );
    assert_eq!(
        warnings[1].hint,
        "Expecting equivalent in User model of 'account: OneToOne<Profile>' with related = \"user\""
    );
}

#[test]
fn relation_primary_key() {
    let model = assert_ok!(Profile::definition());
    let pk = model.primary_key_field().unwrap();

    assert_eq!(pk.name.app_name, "user");
    assert_eq!(
        pk.native_declaration(),
        "user = OneToOneField(to=\"User\", on_delete=CASCADE, related_name=\"account\", primary_key=true)"
    );
}

#[test]
fn configured_app() {
    let app = assert_ok!(App::builder()
        .config(Config::new().on_delete(OnDelete::Protect).upload_to("media"))
        .register_type("Markdown", FieldLookup::new(Type::Text, FieldKind::Text))
        .declaration(
            ModelDecl::new("Page")
                .field(FieldDecl::new("content", "Markdown"))
                .field(FieldDecl::new("cover", "Option<Image>"))
                .field(FieldDecl::new("parent", "Option<Foreign<Self>>").related("children"))
                .field(FieldDecl::new("children", "Reverse<Page>").related("parent")),
        )
        .build());

    assert!(app.check().is_empty());

    let page = app.schema().model_by_name("Page").unwrap();
    assert_eq!(
        page.native_fields()
            .map(|field| field.native_declaration())
            .collect::<Vec<_>>(),
        [
            "content = TextField()",
            "cover = ImageField(upload_to=\"media\", null=true)",
            "parent = ForeignKey(to=\"Page\", on_delete=PROTECT, related_name=\"children\", null=true)",
        ]
    );
}

#[test]
fn duplicate_registration() {
    let err = assert_err!(App::builder()
        .register::<Tag>()
        .register::<Tag>()
        .build());
    assert!(err.is_invalid_schema());
}
