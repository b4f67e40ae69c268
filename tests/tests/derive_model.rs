use freeform::schema::app::{FieldKind, PrimaryKey, RelationKind, Type};
use freeform::schema::decl::TypeHint;
use freeform::{Email, ManyToOne, Model, Slug, Text, Value};
use pretty_assertions::assert_eq;
use tests::*;

#[allow(dead_code)]
#[derive(Model)]
struct ExampleTypedModel {
    id: i32,

    #[field(max_length = 100)]
    name: Text,

    #[field(default = true)]
    active: bool,
}

#[test]
fn example_model() {
    assert_eq!(
        native_fields::<ExampleTypedModel>(),
        [
            "id = IntegerField(primary_key=true)",
            "name = TextField(max_length=100)",
            "active = BooleanField(default=true)",
        ]
    );

    let model = assert_ok!(ExampleTypedModel::definition());
    assert_eq!(model.ident, "ExampleTypedModel");
    assert_eq!(model.primary_key, PrimaryKey::Field(0));
}

#[allow(dead_code)]
#[derive(Model)]
#[model(table = "blog_articles")]
struct Article {
    #[field(unique, max_length = 80)]
    slug: Slug,

    title: String,

    body: Option<Text>,

    #[field(column = "contact", blank)]
    email: Option<Email>,

    #[field(default = -1)]
    rank: i64,

    #[field(default = 0.5)]
    score: f64,

    #[field(kind = char(20))]
    status: String,

    published_at: Option<std::time::SystemTime>,

    #[field(skip)]
    cached_html: Option<String>,
}

#[test]
fn field_options() {
    assert_eq!(
        native_fields::<Article>(),
        [
            "slug = SlugField(max_length=80, unique=true)",
            "title = CharField(max_length=255)",
            "body = TextField(null=true)",
            "email = EmailField(max_length=255, db_column=\"contact\", null=true, blank=true)",
            "rank = BigIntegerField(default=-1)",
            "score = FloatField(default=0.5)",
            "status = CharField(max_length=20)",
            "published_at = DateTimeField(null=true)",
        ]
    );

    let decl = Article::declaration();
    assert_eq!(decl.meta.table_name.as_deref(), Some("blog_articles"));
    assert_eq!(decl.fields.len(), 8);
    assert_eq!(decl.fields[4].default, Some(Value::I64(-1)));
    assert_eq!(decl.fields[6].options.kind, Some(FieldKind::Char { max_length: 20 }));
}

#[allow(dead_code)]
#[derive(Model)]
struct Comment {
    #[field(related = "comments")]
    post: ManyToOne<Article>,

    parent: Option<freeform::Foreign<Self>>,

    #[field(default = "replies_to")]
    reply_to: Option<ManyToOne<Comment>>,
}

#[test]
fn relation_fields() {
    let decl = Comment::declaration();
    assert_eq!(
        decl.fields[1].hint,
        TypeHint::Option(Box::new(TypeHint::Relation {
            kind: RelationKind::ManyToOne,
            target: "Comment".to_string(),
        }))
    );

    let model = assert_ok!(Comment::definition());
    assert_eq!(
        model.fields[0].declared_type(),
        Type::Relation(RelationKind::ManyToOne)
    );
    assert_eq!(
        model.fields[2]
            .ty
            .expect_relation()
            .related_name
            .as_deref(),
        Some("replies_to")
    );

    assert_eq!(
        native_fields::<Comment>(),
        [
            "post = ForeignKey(to=\"Article\", on_delete=CASCADE, related_name=\"comments\")",
            "parent = ForeignKey(to=\"Comment\", on_delete=CASCADE, null=true)",
            "reply_to = ForeignKey(to=\"Comment\", on_delete=CASCADE, related_name=\"replies_to\", null=true)",
        ]
    );
}

#[allow(dead_code)]
#[derive(Model)]
struct Sprite {
    name: String,
    size: (u32, u32),
}

#[test]
fn unsupported_type() {
    let err = assert_err!(Sprite::definition());
    assert!(err.is_unsupported_type());
    assert_eq!(
        err.to_string(),
        "field `size` of model `Sprite` has type hint `(u32, u32)`, \
         but there is no field kind registered for that type"
    );
}

#[allow(dead_code)]
#[derive(Model)]
struct Gadget {
    name: String,
    parts: Vec<Part>,
}

#[allow(dead_code)]
struct Part;

#[test]
fn generic_containers_resolve_by_origin() {
    let model = assert_ok!(Gadget::definition());
    assert_eq!(model.fields[1].declared_type(), Type::Json);
}
