//! Traversal engine tests
//!
//! Structural segments, recursive descent order, canonical paths, the
//! configuration options, and the output-mode failure contract.

use docpath_core::{
    ConfigOption, Configuration, PathCompiler, PathError, PathEvaluator,
};
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

fn read_with(document: &Value, path: &str, config: &Configuration) -> Vec<Value> {
    let compiled = PathCompiler::compile(path).unwrap();
    PathEvaluator::evaluate(&compiled, document, config)
        .unwrap()
        .values
}

fn read(document: &Value, path: &str) -> Vec<Value> {
    read_with(document, path, &Configuration::default())
}

mod structural_segments {
    use super::*;

    #[test]
    fn root_path_matches_the_whole_document() {
        let document = document();
        let matches = read(&document, "$");
        assert_eq!(matches, vec![document.clone()]);
    }

    #[test]
    fn definite_property_chain_matches_one_node() {
        let document = document();
        let matches = read(&document, "$.store.book[0].author");
        assert_eq!(matches, vec![json!("Nigel Rees")]);
    }

    #[test]
    fn wildcard_fans_out_over_array_elements() {
        let document = document();
        let authors = read(&document, "$.store.book[*].author");
        assert_eq!(
            authors,
            vec![
                json!("Nigel Rees"),
                json!("Evelyn Waugh"),
                json!("Herman Melville"),
                json!("J. R. R. Tolkien")
            ]
        );
    }

    #[test]
    fn wildcard_fans_out_over_map_values() {
        let document = document();
        let children = read(&document, "$.store.*");
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn negative_index_counts_from_the_end() {
        let document = document();
        let last = read(&document, "$.store.book[-1].title");
        assert_eq!(last, vec![json!("The Lord of the Rings")]);
    }

    #[test]
    fn index_list_selects_each_index() {
        let document = document();
        let titles = read(&document, "$.store.book[0,2].title");
        assert_eq!(
            titles,
            vec![json!("Sayings of the Century"), json!("Moby Dick")]
        );
    }

    #[test]
    fn multi_property_bracket_fans_out_per_name() {
        let document = document();
        let fields = read(&document, "$.store.book[0]['author','title']");
        assert_eq!(
            fields,
            vec![json!("Nigel Rees"), json!("Sayings of the Century")]
        );
    }

    #[test]
    fn out_of_range_index_yields_no_result() {
        let document = document();
        assert!(read(&document, "$.store.book[17]").is_empty());
        assert!(read(&document, "$.store.book[-17]").is_empty());
    }

    #[test]
    fn property_on_non_object_yields_no_result() {
        let document = document();
        assert!(read(&document, "$.store.book.title").is_empty());
        assert!(read(&document, "$.max-price.anything").is_empty());
    }
}

mod slices {
    use super::*;

    #[test]
    fn slice_bounds_follow_python_conventions() {
        let doc = json!([0, 1, 2, 3, 4]);
        assert_eq!(read(&doc, "$[1:3]"), vec![json!(1), json!(2)]);
        assert_eq!(read(&doc, "$[:2]"), vec![json!(0), json!(1)]);
        assert_eq!(read(&doc, "$[3:]"), vec![json!(3), json!(4)]);
        assert_eq!(read(&doc, "$[-2:]"), vec![json!(3), json!(4)]);
        assert_eq!(read(&doc, "$[:-3]"), vec![json!(0), json!(1)]);
    }

    #[test]
    fn slice_step_skips_elements() {
        let doc = json!([0, 1, 2, 3, 4, 5]);
        assert_eq!(read(&doc, "$[::2]"), vec![json!(0), json!(2), json!(4)]);
        assert_eq!(read(&doc, "$[1:6:2]"), vec![json!(1), json!(3), json!(5)]);
    }

    #[test]
    fn slice_bounds_clamp_to_array_length() {
        let doc = json!([0, 1, 2]);
        assert_eq!(read(&doc, "$[0:99]").len(), 3);
        assert_eq!(read(&doc, "$[-99:]").len(), 3);
    }

    #[test]
    fn empty_slice_yields_zero_branches() {
        let doc = json!([0, 1, 2]);
        assert!(read(&doc, "$[2:1]").is_empty());
        assert!(read(&doc, "$[3:]").is_empty());
    }
}

mod recursive_descent {
    use super::*;

    #[test]
    fn descends_to_every_matching_property() {
        let document = document();
        let authors = read(&document, "$..author");
        assert_eq!(authors.len(), 4);

        let prices = read(&document, "$..display-price");
        assert_eq!(prices.len(), 5);
    }

    #[test]
    fn descent_is_preorder_depth_first() {
        let doc = json!({"a": {"b": {"leaf": 1}, "leaf": 2}, "leaf": 3});
        let compiled = PathCompiler::compile("$..leaf").unwrap();
        let outcome =
            PathEvaluator::evaluate(&compiled, &doc, &Configuration::default()).unwrap();

        // Each node is visited before its descendants, so the root's
        // own member comes first, then progressively deeper matches
        assert_eq!(
            outcome.paths,
            vec![
                "$['leaf']",
                "$['a']['leaf']",
                "$['a']['b']['leaf']",
            ]
        );
        assert_eq!(outcome.values, vec![json!(3), json!(2), json!(1)]);
    }

    #[test]
    fn descent_composes_with_trailing_segments() {
        let document = document();
        let moby = read(&document, "$..book[2].title");
        assert_eq!(moby, vec![json!("Moby Dick")]);

        let filtered = read(&document, "$..book[?(@.isbn)].author");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn descent_wildcard_visits_every_node_once() {
        let doc = json!({"a": [1, 2], "b": {"c": 3}});
        // Every node except the root: a, a[0], a[1], b, b.c
        assert_eq!(read(&doc, "$..*").len(), 5);
    }
}

mod canonical_paths {
    use super::*;

    #[test]
    fn paths_render_in_bracket_and_quote_form() {
        let document = document();
        let compiled = PathCompiler::compile("$.store.book[?(@.isbn)].author").unwrap();
        let outcome =
            PathEvaluator::evaluate(&compiled, &document, &Configuration::default()).unwrap();
        assert_eq!(
            outcome.paths,
            vec![
                "$['store']['book'][2]['author']",
                "$['store']['book'][3]['author']"
            ]
        );
    }

    #[test]
    fn canonical_paths_round_trip_to_the_same_node() {
        let document = document();
        let compiled = PathCompiler::compile("$..display-price").unwrap();
        let outcome =
            PathEvaluator::evaluate(&compiled, &document, &Configuration::default()).unwrap();

        for (path, value) in outcome.paths.iter().zip(outcome.values.iter()) {
            let reparsed = PathCompiler::compile(path).unwrap();
            assert!(reparsed.is_definite(), "canonical path must be definite");
            let resolved =
                PathEvaluator::evaluate(&reparsed, &document, &Configuration::default()).unwrap();
            assert_eq!(resolved.values, vec![value.clone()], "path {path}");
        }
    }
}

mod output_modes {
    use super::*;

    #[test]
    fn definite_miss_produces_no_matches() {
        let document = document();
        let compiled = PathCompiler::compile("$.store.book[0].isbn").unwrap();
        let outcome =
            PathEvaluator::evaluate(&compiled, &document, &Configuration::default()).unwrap();
        // The engine reports no matches; the read surface turns that
        // into NotFound for definite paths
        assert!(outcome.is_empty());
    }

    #[test]
    fn leaf_to_null_resolves_missing_leaves() {
        let document = document();
        let config = Configuration::builder()
            .option(ConfigOption::DefaultPathLeafToNull)
            .build();
        let values = read_with(&document, "$.store.book[0].isbn", &config);
        assert_eq!(values, vec![json!(null)]);

        // Every book now produces a value, null where isbn is absent
        let values = read_with(&document, "$.store.book[*].isbn", &config);
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], json!(null));
    }

    #[test]
    fn require_properties_fails_on_missing_members() {
        let document = document();
        let config = Configuration::builder()
            .option(ConfigOption::RequireProperties)
            .build();
        let compiled = PathCompiler::compile("$.store.book[*].isbn").unwrap();
        let error = PathEvaluator::evaluate(&compiled, &document, &config).unwrap_err();
        assert!(matches!(error, PathError::NotFound { .. }));
    }

    #[test]
    fn require_properties_does_not_leak_into_predicates() {
        let document = document();
        let config = Configuration::builder()
            .option(ConfigOption::RequireProperties)
            .build();
        // The predicate probes @.isbn on books without one; that must
        // stay a non-match, not a failure
        let values = read_with(&document, "$.store.book[?(@.isbn)].author", &config);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn compiled_paths_evaluate_concurrently() {
        use std::sync::Arc;

        let document = Arc::new(document());
        let compiled =
            Arc::new(PathCompiler::compile("$..book[?(@.display-price < 10)].author").unwrap());

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let document = Arc::clone(&document);
                let compiled = Arc::clone(&compiled);
                scope.spawn(move || {
                    // Each evaluation allocates its own context; the
                    // compiled path itself is shared immutably
                    let outcome = PathEvaluator::evaluate(
                        &compiled,
                        &document,
                        &Configuration::default(),
                    )
                    .unwrap();
                    assert_eq!(outcome.values.len(), 2);
                });
            }
        });
    }

    #[test]
    fn evaluation_is_idempotent() {
        let document = document();
        let compiled = PathCompiler::compile("$..book[?(@.display-price < 10)].title").unwrap();
        let first =
            PathEvaluator::evaluate(&compiled, &document, &Configuration::default()).unwrap();
        for _ in 0..3 {
            let again =
                PathEvaluator::evaluate(&compiled, &document, &Configuration::default()).unwrap();
            assert_eq!(first.values, again.values);
            assert_eq!(first.paths, again.paths);
        }
    }
}
