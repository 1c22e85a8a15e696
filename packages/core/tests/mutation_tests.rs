//! Mutation tests
//!
//! set/put/add/delete/rename/map against matched locations, including
//! multi-match edits and the target-materialization guarantee for
//! array removals.

use docpath_core::{evaluator, ConfigOption, Configuration, PathCompiler, PathError};
use serde_json::{json, Value};

fn document() -> Value {
    json!({
        "store": {
            "book": [
                {"category": "reference", "author": "Nigel Rees", "display-price": 8.95},
                {"category": "fiction", "author": "Evelyn Waugh", "display-price": 12.99},
                {"category": "fiction", "author": "Herman Melville", "isbn": "0-553-21311-3", "display-price": 8.99},
                {"category": "fiction", "author": "J. R. R. Tolkien", "isbn": "0-395-19395-8", "display-price": 22.99}
            ],
            "bicycle": {"color": "red", "display-price": 19.95}
        }
    })
}

fn compile(path: &str) -> docpath_core::CompiledPath {
    PathCompiler::compile(path).unwrap()
}

fn read(document: &Value, path: &str) -> Vec<Value> {
    docpath_core::PathEvaluator::evaluate(&compile(path), document, &Configuration::default())
        .unwrap()
        .values
}

mod set {
    use super::*;

    #[test]
    fn set_updates_every_matched_location() {
        let mut document = document();
        let config = Configuration::default();

        let affected = evaluator::set(
            &compile("$.store.book[*].display-price"),
            &mut document,
            &json!(10),
            &config,
        )
        .unwrap();

        assert_eq!(affected, 4);
        assert_eq!(
            read(&document, "$.store.book[*].display-price"),
            vec![json!(10), json!(10), json!(10), json!(10)]
        );
        // Sibling data outside the match set is untouched
        assert_eq!(
            read(&document, "$.store.bicycle.display-price"),
            vec![json!(19.95)]
        );
    }

    #[test]
    fn filtered_set_only_touches_matching_elements() {
        let mut document = document();
        let config = Configuration::default();

        evaluator::set(
            &compile("$.store.book[?(@.display-price > 10)].category"),
            &mut document,
            &json!("expensive"),
            &config,
        )
        .unwrap();

        assert_eq!(
            read(&document, "$.store.book[*].category"),
            vec![
                json!("reference"),
                json!("expensive"),
                json!("fiction"),
                json!("expensive")
            ]
        );
    }

    #[test]
    fn set_on_missing_definite_path_is_not_found() {
        let mut document = document();
        let error = evaluator::set(
            &compile("$.store.magazine"),
            &mut document,
            &json!(1),
            &Configuration::default(),
        )
        .unwrap_err();
        assert!(matches!(error, PathError::NotFound { .. }));
    }

    #[test]
    fn suppressed_set_on_missing_path_is_a_no_op() {
        let mut document = document();
        let config = Configuration::builder()
            .option(ConfigOption::SuppressExceptions)
            .build();
        let affected = evaluator::set(
            &compile("$.store.magazine"),
            &mut document,
            &json!(1),
            &config,
        )
        .unwrap();
        assert_eq!(affected, 0);
    }
}

mod delete {
    use super::*;

    #[test]
    fn delete_removes_filtered_matches() {
        let mut document = document();
        let affected = evaluator::delete(
            &compile("$.store.book[?(@.isbn)]"),
            &mut document,
            &Configuration::default(),
        )
        .unwrap();

        assert_eq!(affected, 2);
        assert_eq!(
            read(&document, "$.store.book[*].author"),
            vec![json!("Nigel Rees"), json!("Evelyn Waugh")]
        );
    }

    #[test]
    fn multi_index_delete_does_not_shift_pending_targets() {
        let mut document = json!([10, 11, 12, 13, 14]);
        let affected = evaluator::delete(
            &compile("$[0,2,4]"),
            &mut document,
            &Configuration::default(),
        )
        .unwrap();

        assert_eq!(affected, 3);
        assert_eq!(document, json!([11, 13]));
    }

    #[test]
    fn delete_a_map_member() {
        let mut document = document();
        evaluator::delete(
            &compile("$.store.bicycle.color"),
            &mut document,
            &Configuration::default(),
        )
        .unwrap();
        assert!(read(&document, "$.store.bicycle.color").is_empty());
    }
}

mod add_and_put {
    use super::*;

    #[test]
    fn add_appends_to_the_matched_array() {
        let mut document = document();
        let new_book = json!({"category": "fiction", "author": "Douglas Adams", "display-price": 6.49});

        let affected = evaluator::add(
            &compile("$.store.book"),
            &mut document,
            &new_book,
            &Configuration::default(),
        )
        .unwrap();

        assert_eq!(affected, 1);
        assert_eq!(read(&document, "$.store.book[*]").len(), 5);
        assert_eq!(
            read(&document, "$.store.book[-1].author"),
            vec![json!("Douglas Adams")]
        );
    }

    #[test]
    fn add_to_a_non_array_is_a_provider_error() {
        let mut document = document();
        let error = evaluator::add(
            &compile("$.store.bicycle"),
            &mut document,
            &json!(1),
            &Configuration::default(),
        )
        .unwrap_err();
        assert!(matches!(error, PathError::Provider { .. }));
    }

    #[test]
    fn put_inserts_a_member_on_the_matched_map() {
        let mut document = document();
        let affected = evaluator::put(
            &compile("$.store.bicycle"),
            &mut document,
            "wheels",
            &json!(2),
            &Configuration::default(),
        )
        .unwrap();

        assert_eq!(affected, 1);
        assert_eq!(read(&document, "$.store.bicycle.wheels"), vec![json!(2)]);
    }

    #[test]
    fn put_on_every_filter_match() {
        let mut document = document();
        evaluator::put(
            &compile("$.store.book[?(@.isbn)]"),
            &mut document,
            "archived",
            &json!(true),
            &Configuration::default(),
        )
        .unwrap();
        assert_eq!(read(&document, "$.store.book[?(@.archived)]").len(), 2);
    }
}

mod rename_and_map {
    use super::*;

    #[test]
    fn rename_key_preserves_the_value() {
        let mut document = document();
        let affected = evaluator::rename_key(
            &compile("$.store"),
            &mut document,
            "bicycle",
            "cycle",
            &Configuration::default(),
        )
        .unwrap();

        assert_eq!(affected, 1);
        assert!(read(&document, "$.store.bicycle").is_empty());
        assert_eq!(read(&document, "$.store.cycle.color"), vec![json!("red")]);
    }

    #[test]
    fn rename_missing_key_is_not_found() {
        let mut document = document();
        let error = evaluator::rename_key(
            &compile("$.store"),
            &mut document,
            "motorcycle",
            "cycle",
            &Configuration::default(),
        )
        .unwrap_err();
        assert!(matches!(error, PathError::NotFound { .. }));
    }

    #[test]
    fn map_transforms_every_match() {
        let mut document = document();
        let affected = evaluator::map(
            &compile("$.store.book[*].display-price"),
            &mut document,
            &Configuration::default(),
            &mut |value| json!(value.as_f64().unwrap_or(0.0) * 2.0),
        )
        .unwrap();

        assert_eq!(affected, 4);
        assert_eq!(
            read(&document, "$.store.book[0].display-price"),
            vec![json!(17.9)]
        );
    }

    #[test]
    fn mutating_a_function_result_is_rejected() {
        let mut document = json!({"numbers": [1, 2, 3]});
        let error = evaluator::set(
            &compile("$.numbers.sum()"),
            &mut document,
            &json!(0),
            &Configuration::default(),
        )
        .unwrap_err();
        assert!(matches!(error, PathError::InvalidPath { .. }));
    }
}
