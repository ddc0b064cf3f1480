use jsonapi_encoder::{
    Attributes, Data, DocumentLinks, EncodeError, Encoder, LinkDescriptor, LinkedData, RenderOptions, Resource,
    Schema, SchemaRegistry,
};
use serde_json::{json, Value};

struct Person {
    id: u32,
    name: &'static str,
}

struct Article {
    id: u32,
    title: &'static str,
    author: Option<Person>,
}

struct Unregistered;

struct PersonSchema;

impl Schema for PersonSchema {
    type Resource = Person;

    fn resource_type(&self) -> &str {
        "people"
    }

    fn id(&self, person: &Person) -> String {
        person.id.to_string()
    }

    fn attributes(&self, person: &Person) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("name".into(), json!(person.name));
        attributes
    }
}

struct ArticleSchema;

impl Schema for ArticleSchema {
    type Resource = Article;

    fn resource_type(&self) -> &str {
        "article"
    }

    fn id(&self, article: &Article) -> String {
        article.id.to_string()
    }

    fn attributes(&self, article: &Article) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("title".into(), json!(article.title));
        attributes
    }

    fn relationships<'a>(&self, article: &'a Article) -> Vec<LinkDescriptor<'a>> {
        vec![LinkDescriptor::new("author", LinkedData::optional(article.author.as_ref())).include()]
    }
}

fn encoder() -> Encoder {
    Encoder::new(SchemaRegistry::new().with(ArticleSchema).with(PersonSchema))
}

fn article(id: u32, author: Option<Person>) -> Article {
    Article {
        id,
        title: "JSON API paints my bikeshed!",
        author,
    }
}

#[test]
fn test_single_article_includes_author() {
    let article = article(1, Some(Person { id: 9, name: "Dan" }));

    let document = encoder().encode_value(Data::single(&article), None, None).unwrap();

    assert_eq!(
        document,
        json!({
            "data": {
                "type": "article",
                "id": "1",
                "attributes": { "title": "JSON API paints my bikeshed!" },
                "relationships": {
                    "author": { "data": { "type": "people", "id": "9" } }
                },
                "links": { "self": "/article/1" }
            },
            "included": [{
                "type": "people",
                "id": "9",
                "attributes": { "name": "Dan" }
            }]
        })
    );
}

#[test]
fn test_collection_keeps_input_order_without_included() {
    let articles = [article(1, None), article(2, None)];

    let document = encoder().encode_value(Data::collection(&articles), None, None).unwrap();

    let data = document["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], json!("1"));
    assert_eq!(data[1]["id"], json!("2"));
    assert_eq!(data[0]["relationships"]["author"], json!({ "data": null }));
    assert!(document.get("included").is_none());
}

#[test]
fn test_heterogeneous_collection_fails_before_output() {
    let article = article(1, None);
    let person = Person { id: 9, name: "Dan" };
    let data = Data::collection_dyn(vec![&article as &dyn Resource, &person]);

    match encoder().encode(data, None, None, None) {
        Err(EncodeError::HeterogeneousCollection { expected, found, index }) => {
            assert!(expected.ends_with("Article"));
            assert!(found.ends_with("Person"));
            assert_eq!(index, 1);
        }
        other => panic!("expected heterogeneous collection error, got {:?}", other),
    }
}

#[test]
fn test_null_and_empty_data_differ() {
    let encoder = encoder();
    assert_eq!(encoder.encode(Data::null(), None, None, None).unwrap(), r#"{"data":null}"#);
    assert_eq!(encoder.encode(Data::empty(), None, None, None).unwrap(), r#"{"data":[]}"#);
    assert_eq!(
        encoder.encode(Data::optional::<Article>(None), None, None, None).unwrap(),
        r#"{"data":null}"#
    );
}

#[test]
fn test_missing_collection_entry_is_invalid_input() {
    let first = article(1, None);
    let data = Data::sparse([Some(&first), None]);

    let err = encoder().encode(data, None, None, None).unwrap_err();
    assert!(matches!(err, EncodeError::InvalidInputShape(_)));
}

#[test]
fn test_unregistered_primary_type() {
    let err = encoder().encode(Data::single(&Unregistered), None, None, None).unwrap_err();
    match err {
        EncodeError::SchemaNotFound(name) => assert!(name.ends_with("Unregistered")),
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn test_unregistered_linked_type() {
    let article = article(1, Some(Person { id: 9, name: "Dan" }));
    let encoder = Encoder::new(SchemaRegistry::new().with(ArticleSchema));

    let err = encoder.encode(Data::single(&article), None, None, None).unwrap_err();
    match err {
        EncodeError::SchemaNotFound(name) => assert!(name.ends_with("Person")),
        other => panic!("unexpected error {}", other),
    }
}

#[test]
fn test_top_level_links_and_meta() {
    let articles = [article(1, None)];
    let links = DocumentLinks::new()
        .with_self("http://example.com/articles?page=1")
        .with_next("http://example.com/articles?page=2");

    let document = encoder()
        .encode_value(Data::collection(&articles), Some(&links), Some(json!({ "total": 2 })))
        .unwrap();

    assert_eq!(
        document["links"],
        json!({
            "self": "http://example.com/articles?page=1",
            "next": "http://example.com/articles?page=2"
        })
    );
    assert_eq!(document["meta"], json!({ "total": 2 }));
}

#[test]
fn test_empty_top_level_links_are_omitted() {
    let document = encoder()
        .encode_value(Data::null(), Some(&DocumentLinks::new()), None)
        .unwrap();
    assert_eq!(document, json!({ "data": null }));
}

#[test]
fn test_rendered_key_order() {
    let article = article(1, Some(Person { id: 9, name: "Dan" }));

    let rendered = encoder()
        .encode(Data::single(&article), None, Some(json!({ "copyright": "none" })), None)
        .unwrap();

    assert_eq!(
        rendered,
        concat!(
            r#"{"data":{"type":"article","id":"1","attributes":{"title":"JSON API paints my bikeshed!"},"#,
            r#""relationships":{"author":{"data":{"type":"people","id":"9"}}},"links":{"self":"/article/1"}},"#,
            r#""included":[{"type":"people","id":"9","attributes":{"name":"Dan"}}],"#,
            r#""meta":{"copyright":"none"}}"#
        )
    );
}

#[test]
fn test_render_options_per_call_override() {
    let article = article(1, None);
    let encoder = encoder().with_options(RenderOptions {
        escape_slashes: true,
        ..RenderOptions::default()
    });

    let escaped = encoder.encode(Data::single(&article), None, None, None).unwrap();
    assert!(escaped.contains(r#""self":"\/article\/1""#));

    let pretty = RenderOptions {
        indent: 2,
        ..RenderOptions::pretty()
    };
    let rendered = encoder.encode(Data::single(&article), None, None, Some(&pretty)).unwrap();
    assert!(rendered.starts_with("{\n  \"data\": {\n    \"type\": \"article\""));
    assert!(rendered.contains("\"self\": \"/article/1\""));

    let parsed: Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["data"]["id"], json!("1"));
}

#[test]
fn test_instance_from_config() {
    let options = RenderOptions::from_json(r#"{ "max_depth": 2 }"#).unwrap();
    let encoder = Encoder::instance(SchemaRegistry::new().with(ArticleSchema).with(PersonSchema), options);
    let article = article(1, None);

    // data -> relationships -> author -> data is nested four deep
    let err = encoder.encode(Data::single(&article), None, None, None).unwrap_err();
    assert!(matches!(err, EncodeError::DepthExceeded { limit: 2, .. }));
    assert_eq!(encoder.options().max_depth, 2);
    assert_eq!(encoder.registry().len(), 2);
}
