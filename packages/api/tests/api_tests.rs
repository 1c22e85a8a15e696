//! Fluent API tests
//!
//! Read modes, typed reads, configuration binding, and mutations
//! through the document context.

use docpath::{ConfigOption, Configuration, DocPath, PathError};
use serde::Deserialize;
use serde_json::{json, Value};

fn document() -> Value {
    json!({
        "store": {
            "book": [
                {"category": "reference", "author": "Nigel Rees", "title": "Sayings of the Century", "display-price": 8.95},
                {"category": "fiction", "author": "Evelyn Waugh", "title": "Sword of Honour", "display-price": 12.99},
                {"category": "fiction", "author": "Herman Melville", "title": "Moby Dick", "isbn": "0-553-21311-3", "display-price": 8.99},
                {"category": "fiction", "author": "J. R. R. Tolkien", "title": "The Lord of the Rings", "isbn": "0-395-19395-8", "display-price": 22.99}
            ],
            "bicycle": {"color": "red", "display-price": 19.95}
        },
        "max-price": 10
    })
}

mod read_modes {
    use super::*;

    #[test]
    fn definite_paths_read_a_single_value() {
        let ctx = DocPath::parse(document());
        assert_eq!(ctx.read("$.store.book[0].author").unwrap(), json!("Nigel Rees"));
        assert_eq!(ctx.read("$.store.bicycle.color").unwrap(), json!("red"));
    }

    #[test]
    fn indefinite_paths_read_a_list() {
        let ctx = DocPath::parse(document());
        let authors = ctx.read("$.store.book[?(@.isbn)].author").unwrap();
        assert_eq!(authors, json!(["Herman Melville", "J. R. R. Tolkien"]));

        let empty = ctx.read("$.store.book[?(@.display-price > 100)]").unwrap();
        assert_eq!(empty, json!([]));
    }

    #[test]
    fn definite_miss_is_not_found() {
        let ctx = DocPath::parse(document());
        let error = ctx.read("$.store.book[0].isbn").unwrap_err();
        assert!(matches!(error, PathError::NotFound { .. }));
    }

    #[test]
    fn suppressed_miss_reads_null() {
        let ctx = DocPath::using(
            Configuration::builder()
                .option(ConfigOption::SuppressExceptions)
                .build(),
        )
        .parse(document());
        assert_eq!(ctx.read("$.store.book[0].isbn").unwrap(), json!(null));
    }

    #[test]
    fn always_return_list_wraps_definite_reads() {
        let ctx = DocPath::using(
            Configuration::builder()
                .option(ConfigOption::AlwaysReturnList)
                .build(),
        )
        .parse(document());
        assert_eq!(
            ctx.read("$.store.book[0].author").unwrap(),
            json!(["Nigel Rees"])
        );
    }

    #[test]
    fn as_path_list_reads_canonical_paths() {
        let ctx = DocPath::using(
            Configuration::builder()
                .option(ConfigOption::AsPathList)
                .build(),
        )
        .parse(document());
        assert_eq!(
            ctx.read("$.store.book[?(@.isbn)].author").unwrap(),
            json!([
                "$['store']['book'][2]['author']",
                "$['store']['book'][3]['author']"
            ])
        );
    }

    #[test]
    fn read_paths_returns_canonical_strings() {
        let ctx = DocPath::parse(document());
        let paths = ctx.read_paths("$.store.book[0,1].title").unwrap();
        assert_eq!(
            paths,
            vec![
                "$['store']['book'][0]['title']",
                "$['store']['book'][1]['title']"
            ]
        );
    }

    #[test]
    fn compiled_paths_are_reusable() {
        let compiled = DocPath::compile("$.store.book[*].display-price").unwrap();
        let ctx = DocPath::parse(document());
        let prices = ctx.read_compiled(&compiled).unwrap();
        assert_eq!(prices, json!([8.95, 12.99, 8.99, 22.99]));
    }

    #[test]
    fn one_shot_read_over_a_borrowed_document() {
        let document = document();
        let color = DocPath::read(&document, "$.store.bicycle.color").unwrap();
        assert_eq!(color, json!("red"));
    }
}

mod typed_reads {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Book {
        category: String,
        author: String,
        title: String,
        isbn: Option<String>,
        #[serde(rename = "display-price")]
        display_price: f64,
    }

    #[test]
    fn read_as_maps_into_typed_values() {
        let ctx = DocPath::parse(document());

        let authors: Vec<String> = ctx.read_as("$.store.book[*].author").unwrap();
        assert_eq!(authors.len(), 4);
        assert_eq!(authors[0], "Nigel Rees");

        let book: Book = ctx.read_as("$.store.book[2]").unwrap();
        assert_eq!(book.author, "Herman Melville");
        assert_eq!(book.isbn.as_deref(), Some("0-553-21311-3"));
    }

    #[test]
    fn read_as_reports_mapping_failures() {
        let ctx = DocPath::parse(document());
        let error = ctx.read_as::<Vec<f64>>("$.store.book[*].author").unwrap_err();
        assert!(matches!(error, PathError::Provider { .. }));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parse_str_accepts_json_text() {
        let ctx = DocPath::parse_str(r#"{"a": {"b": 42}}"#).unwrap();
        assert_eq!(ctx.read("$.a.b").unwrap(), json!(42));
    }

    #[test]
    fn parse_str_rejects_invalid_json() {
        let error = DocPath::parse_str("{not json").unwrap_err();
        assert!(matches!(error, PathError::Provider { .. }));
    }

    #[test]
    fn compile_errors_surface_through_the_api() {
        let ctx = DocPath::parse(document());
        let error = ctx.read("$.store.book[").unwrap_err();
        assert!(error.is_compile_error());
    }
}

mod mutations {
    use super::*;

    #[test]
    fn set_through_the_context() {
        let mut ctx = DocPath::parse(document());
        let affected = ctx.set("$.store.book[*].category", json!("all")).unwrap();
        assert_eq!(affected, 4);
        assert_eq!(
            ctx.read("$.store.book[*].category").unwrap(),
            json!(["all", "all", "all", "all"])
        );
    }

    #[test]
    fn delete_then_read_reflects_the_change() {
        let mut ctx = DocPath::parse(document());
        ctx.delete("$.store.book[?(@.display-price > 10)]").unwrap();
        assert_eq!(
            ctx.read("$.store.book[*].author").unwrap(),
            json!(["Nigel Rees", "Herman Melville"])
        );
    }

    #[test]
    fn add_put_and_rename() {
        let mut ctx = DocPath::parse(document());

        ctx.add("$.store.book", json!({"author": "Douglas Adams"}))
            .unwrap();
        ctx.put("$.store.bicycle", "wheels", json!(2)).unwrap();
        ctx.rename_key("$.store", "bicycle", "cycle").unwrap();

        assert_eq!(
            ctx.read("$.store.book[-1].author").unwrap(),
            json!("Douglas Adams")
        );
        assert_eq!(ctx.read("$.store.cycle.wheels").unwrap(), json!(2));
    }

    #[test]
    fn map_transforms_values_in_place() {
        let mut ctx = DocPath::parse(json!({"counts": [1, 2, 3]}));
        ctx.map("$.counts[*]", |value| {
            json!(value.as_i64().unwrap_or(0) + 10)
        })
        .unwrap();
        assert_eq!(ctx.read("$.counts").unwrap(), json!([11, 12, 13]));
    }
}
